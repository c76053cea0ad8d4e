//! Color definitions for operations, toasts and UI elements

use ratatui::style::Color;

use crate::app::ToastKind;
use crate::sequence::Operation;

/// Get the accent color of an operation trigger
pub fn get_operation_color(operation: Operation) -> Color {
    match operation {
        Operation::Reverse => Color::Blue,
        Operation::Complement => Color::Green,
        Operation::ReverseComplement => Color::Magenta,
    }
}

pub fn get_toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    }
}

/// Dimmed color used for disabled controls
pub const DISABLED: Color = Color::DarkGray;

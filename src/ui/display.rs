//! Display formatting functions for the UI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use crate::sequence::Operation;
use crate::ui::colors::{get_operation_color, DISABLED};

/// Key hint shown on each operation trigger
pub fn operation_key_hint(operation: Operation) -> &'static str {
    match operation {
        Operation::Reverse => "F1 / Ctrl-R",
        Operation::Complement => "F2 / Ctrl-O",
        Operation::ReverseComplement => "F3 / Ctrl-B",
    }
}

/// Build the three lines of an operation trigger, dimmed when disabled
pub fn create_operation_trigger(operation: Operation, enabled: bool) -> Vec<Line<'static>> {
    let accent = if enabled { get_operation_color(operation) } else { DISABLED };
    let muted = if enabled { Style::default() } else { Style::default().fg(DISABLED) };

    vec![
        Line::from(Span::styled(
            operation.label(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(operation.example(), muted)),
        Line::from(Span::styled(operation_key_hint(operation), muted.add_modifier(Modifier::DIM))),
    ]
}

/// Badge appended to the output title naming the last operation
pub fn operation_badge(operation: Option<Operation>) -> Option<Span<'static>> {
    operation.map(|op| {
        Span::styled(
            format!(" [{}] ", op.label()),
            Style::default().fg(get_operation_color(op)).add_modifier(Modifier::BOLD),
        )
    })
}

/// Lines of a text buffer, or a dim placeholder when it is empty
pub fn text_or_placeholder(text: &str, placeholder: &'static str) -> Vec<Line<'static>> {
    if text.is_empty() {
        return placeholder
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(DISABLED))))
            .collect();
    }
    text.split('\n').map(|l| Line::from(l.to_string())).collect()
}

/// Scroll offset keeping `row` visible inside a pane of `height` rows
pub fn scroll_to_row(row: usize, height: u16) -> u16 {
    let height = height as usize;
    if height == 0 || row < height {
        0
    } else {
        (row + 1 - height).min(u16::MAX as usize) as u16
    }
}

/// Rectangle of `width` x `height` in the top-right corner of `area`
pub fn top_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

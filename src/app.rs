use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};

use crate::clipboard::Clipboard;
use crate::sequence::{self, Operation};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub created: Instant,
}

pub struct App {
    pub input: String,
    /// Byte offset into `input`, always on a char boundary.
    pub cursor: usize,
    pub output: String,
    pub operation: Option<Operation>,
    pub focus: Pane,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new() -> App {
        debug!("Creating new App instance");
        App {
            input: String::new(),
            cursor: 0,
            output: String::new(),
            operation: None,
            focus: Pane::Input,
            toast: None,
        }
    }

    pub fn can_process(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn can_copy_output(&self) -> bool {
        !self.output.trim().is_empty()
    }

    pub fn process(&mut self, operation: Operation) {
        if !self.can_process() {
            warn!("Ignoring {operation} request on empty input");
            self.notify_error("Input is empty", "Enter DNA sequences first");
            return;
        }

        self.output = sequence::transform(&self.input, operation);
        self.operation = Some(operation);
        info!(
            "Applied {} to {} input bytes, {} output lines",
            operation,
            self.input.len(),
            self.output.lines().count()
        );
    }

    pub fn clear(&mut self) {
        if !self.can_process() {
            return;
        }
        info!("Clearing input and output");
        self.input.clear();
        self.output.clear();
        self.operation = None;
        self.cursor = 0;
    }

    pub fn copy_input(&mut self, clipboard: &mut dyn Clipboard) {
        if !self.can_process() {
            return;
        }
        let text = self.input.clone();
        self.copy_to_clipboard(clipboard, &text, "Input sequences");
    }

    pub fn copy_output(&mut self, clipboard: &mut dyn Clipboard) {
        if !self.can_copy_output() {
            return;
        }
        let text = self.output.clone();
        self.copy_to_clipboard(clipboard, &text, "Output");
    }

    fn copy_to_clipboard(&mut self, clipboard: &mut dyn Clipboard, text: &str, what: &str) {
        match clipboard.copy(text) {
            Ok(()) => {
                info!("{what} copied to clipboard ({} bytes)", text.len());
                self.notify_success("Copied", &format!("{what} copied to clipboard"));
            }
            Err(e) => {
                warn!("Clipboard copy failed: {e}");
                self.notify_error("Copy failed", "Unable to copy to clipboard");
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Input => Pane::Output,
            Pane::Output => Pane::Input,
        };
        trace!("Focus moved to {:?}", self.focus);
    }

    /// Expire the toast once it has been shown long enough.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            if now.saturating_duration_since(toast.created) >= TOAST_LIFETIME {
                trace!("Toast '{}' expired", toast.title);
                self.toast = None;
            }
        }
    }

    fn notify_success(&mut self, title: &str, message: &str) {
        self.show_toast(title, message, ToastKind::Success);
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        self.show_toast(title, message, ToastKind::Error);
    }

    fn show_toast(&mut self, title: &str, message: &str, kind: ToastKind) {
        self.toast = Some(Toast {
            title: title.to_string(),
            message: message.to_string(),
            kind,
            created: Instant::now(),
        });
    }

    fn editing(&self) -> bool {
        self.focus == Pane::Input
    }

    pub fn on_key(&mut self, c: char) {
        if !self.editing() {
            return;
        }
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn on_enter(&mut self) {
        self.on_key('\n');
    }

    /// Insert a whole pasted block at the cursor.
    pub fn on_paste(&mut self, text: &str) {
        if !self.editing() {
            return;
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        debug!("Pasting {} bytes into input", text.len());
        self.input.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    pub fn on_backspace(&mut self) {
        if !self.editing() {
            return;
        }
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.input.remove(self.cursor);
        }
    }

    pub fn on_delete(&mut self) {
        if !self.editing() {
            return;
        }
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    pub fn cursor_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return;
        }
        let column = self.input[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
    }

    pub fn cursor_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.input.len() {
            return;
        }
        let column = self.input[self.line_start(self.cursor)..self.cursor].chars().count();
        self.cursor = self.offset_in_line(end + 1, column);
    }

    /// Zero-based (line, column) of the cursor, column counted in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.input[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start(self.cursor)..].chars().count();
        (line, column)
    }

    fn line_start(&self, offset: usize) -> usize {
        self.input[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.input[offset..]
            .find('\n')
            .map_or(self.input.len(), |i| offset + i)
    }

    fn offset_in_line(&self, start: usize, column: usize) -> usize {
        let end = self.line_end(start);
        self.input[start..end]
            .char_indices()
            .nth(column)
            .map_or(end, |(i, _)| start + i)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::Unsupported, "no clipboard"));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn app_with_input(input: &str) -> App {
        let mut app = App::new();
        app.on_paste(input);
        app
    }

    #[test]
    fn test_process_sets_output_and_operation() {
        let mut app = app_with_input("ATCGATCGATCG\nGCTAGCTAGCTA");
        app.process(Operation::ReverseComplement);

        assert_eq!(app.output, "CGATCGATCGAT\nTAGCTAGCTAGC");
        assert_eq!(app.operation, Some(Operation::ReverseComplement));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_process_blank_input_raises_error_toast() {
        let mut app = app_with_input("  \n\t");
        app.output = "previous".to_string();
        app.process(Operation::Reverse);

        assert_eq!(app.output, "previous");
        assert_eq!(app.operation, None);
        let toast = app.toast.expect("toast shown");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Input is empty");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut app = app_with_input("ATCG");
        app.process(Operation::Reverse);
        app.clear();

        assert!(app.input.is_empty());
        assert!(app.output.is_empty());
        assert_eq!(app.operation, None);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_copy_output_success() {
        let mut app = app_with_input("ATCG");
        app.process(Operation::Complement);
        let mut clipboard = RecordingClipboard::default();
        app.copy_output(&mut clipboard);

        assert_eq!(clipboard.copied, vec!["TAGC".to_string()]);
        let toast = app.toast.expect("toast shown");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Output copied to clipboard");
    }

    #[test]
    fn test_copy_failure_raises_error_toast() {
        let mut app = app_with_input("ATCG");
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        app.copy_input(&mut clipboard);

        let toast = app.toast.expect("toast shown");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Copy failed");
    }

    #[test]
    fn test_copy_disabled_when_blank() {
        let mut app = App::new();
        let mut clipboard = RecordingClipboard::default();
        app.copy_input(&mut clipboard);
        app.copy_output(&mut clipboard);

        assert!(clipboard.copied.is_empty());
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_toast_expires() {
        let mut app = App::new();
        app.process(Operation::Reverse);
        let created = app.toast.as_ref().unwrap().created;

        app.tick(created + Duration::from_millis(500));
        assert!(app.toast.is_some());
        app.tick(created + TOAST_LIFETIME);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let app = app_with_input("AT\r\nGC\rTT");
        assert_eq!(app.input, "AT\nGC\nTT");
        assert_eq!(app.cursor, app.input.len());
    }

    #[test]
    fn test_editing_and_cursor_movement() {
        let mut app = App::new();
        for c in "ACGT".chars() {
            app.on_key(c);
        }
        app.on_enter();
        app.on_key('G');
        assert_eq!(app.input, "ACGT\nG");
        assert_eq!(app.cursor_position(), (1, 1));

        app.cursor_up();
        assert_eq!(app.cursor_position(), (0, 1));
        app.on_backspace();
        assert_eq!(app.input, "CGT\nG");

        app.cursor_end();
        app.cursor_down();
        assert_eq!(app.cursor_position(), (1, 1));

        app.cursor_home();
        app.on_delete();
        assert_eq!(app.input, "CGT\n");

        app.cursor_left();
        app.cursor_left();
        assert_eq!(app.cursor_position(), (0, 2));
        app.cursor_right();
        assert_eq!(app.cursor_position(), (0, 3));
    }

    #[test]
    fn test_output_pane_is_read_only() {
        let mut app = app_with_input("AT");
        app.toggle_focus();
        assert_eq!(app.focus, Pane::Output);

        app.on_key('G');
        app.on_backspace();
        app.on_paste("CC");
        assert_eq!(app.input, "AT");
    }
}

//! Copying text to the system clipboard

use std::io::{self, Write};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use log::debug;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard reached through the terminal emulator with an OSC 52 sequence.
///
/// Works over SSH and inside multiplexers that forward OSC 52; terminals
/// without support silently ignore it.
pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl TerminalClipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        TerminalClipboard { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        debug!("Copying {} bytes to clipboard via OSC 52", text.len());
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_osc52_sequence() {
        let mut clipboard = TerminalClipboard::new(Vec::new());
        clipboard.copy("ATCG").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;"));
        // base64 of "ATCG"
        assert!(written.contains("QVRDRw=="));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut clipboard = TerminalClipboard::new(BrokenPipe);
        assert!(clipboard.copy("ATCG").is_err());
    }
}

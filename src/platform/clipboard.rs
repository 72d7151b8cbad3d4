// SPDX-License-Identifier: GPL-3.0-or-later
//! Clipboard access behind a narrow seam.

use std::fmt;

/// Structured clipboard failure, surfaced through the error reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError(pub String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard error: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// Writes text to the system clipboard.
pub trait Clipboard {
    /// Replaces the clipboard content with `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] when the platform clipboard cannot be
    /// opened or written.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ClipboardError(err.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|err| ClipboardError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_error_displays_its_cause() {
        let err = ClipboardError("denied".to_string());
        assert_eq!(format!("{err}"), "clipboard error: denied");
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
//! Consumed interface of the modal task-dialog host.
//!
//! The hosting mechanism itself (message loop, button layout, lifetime
//! management) lives in the application shell. This module only describes
//! the configuration the host accepts and the notifications it routes back
//! through the dialog callback.

/// One command button: wire id plus its label.
///
/// Labels may span two lines; the host renders the first line as the command
/// and the rest as explanatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandButton {
    pub id: i32,
    pub label: &'static str,
}

/// Static configuration handed to the host before the modal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub title: String,
    pub body: String,
    pub buttons: &'static [CommandButton],
    pub allow_cancellation: bool,
    pub use_command_links: bool,
    pub show_close_button: bool,
}

/// Notification delivered by the host to the dialog callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The dialog window finished constructing.
    Created,
    /// A command or common button was activated, identified by its wire id.
    ButtonClicked(i32),
    /// A hyperlink in the body text was activated.
    HyperlinkClicked(String),
    /// The dialog window is going away.
    Destroyed,
}

/// Callback verdict returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackResponse {
    /// Apply the host's default handling; a clicked button closes the dialog.
    Continue,
    /// Suppress the default handling; the dialog stays open.
    Suppress,
}

/// Blocking modal presenter.
pub trait DialogHost {
    /// Presents `config` modally, routing every user notification through
    /// `callback`, and returns once the dialog is dismissed. The boolean
    /// result carries the host's own close verdict.
    fn run(
        &mut self,
        config: &DialogConfig,
        callback: &mut dyn FnMut(Notification) -> CallbackResponse,
    ) -> bool;
}

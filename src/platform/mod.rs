// SPDX-License-Identifier: GPL-3.0-or-later
//! OS integration seams: clipboard, hyperlinks, and user-visible reporting.
//!
//! Each concern is a small trait so the dialog can run against fakes; the
//! `System*`/`MessageBox*` types are the production implementations.

mod clipboard;
mod links;
mod reporting;

pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use links::{LinkOpener, SystemLinkOpener};
pub use reporting::{
    ConfirmationPresenter, ErrorReporter, MessageBoxPresenter, MessageBoxReporter, Severity,
};

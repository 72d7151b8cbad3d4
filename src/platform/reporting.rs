// SPDX-License-Identifier: GPL-3.0-or-later
//! User-visible reporting: process-wide error sink and transient
//! acknowledgements.

use crate::APP_NAME;

/// Severity attached to a reported failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Process-wide error sink.
pub trait ErrorReporter {
    /// Fire-and-forget report; no return value is consumed.
    fn report(&self, severity: Severity, message: &str);
}

/// Transient modal acknowledgement with an OK affordance.
pub trait ConfirmationPresenter {
    /// Blocks until the user dismisses the acknowledgement.
    fn acknowledge(&self, caption: &str, message: &str);
}

/// Reporter presenting failures in an OK-only message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxReporter;

impl ErrorReporter for MessageBoxReporter {
    fn report(&self, severity: Severity, message: &str) {
        let level = match severity {
            Severity::Info => rfd::MessageLevel::Info,
            Severity::Warning => rfd::MessageLevel::Warning,
            Severity::Error => rfd::MessageLevel::Error,
        };

        let _ = rfd::MessageDialog::new()
            .set_level(level)
            .set_title(APP_NAME)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Confirmation presenter backed by an OK-only message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxPresenter;

impl ConfirmationPresenter for MessageBoxPresenter {
    fn acknowledge(&self, caption: &str, message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(caption)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

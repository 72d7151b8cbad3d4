// SPDX-License-Identifier: GPL-3.0-or-later
//! About dialog and environment diagnostics for TranslucentTB.
//!
//! Two cooperating pieces: [`diagnostics::build_report`] gathers
//! version/environment facts from several independently failing sources into
//! one line-delimited text report, and [`dialog::AboutDialog`] drives the
//! modal About presentation whose command links copy that report to the
//! clipboard or open the community and donation pages.
//!
//! The modal host itself, the clipboard, hyperlink handling, and process-wide
//! error reporting are external collaborators reached through the narrow
//! traits in [`dialog::host`] and [`platform`].

pub mod diagnostics;
pub mod dialog;
pub mod error;
pub mod platform;

/// Application display name, baked into dialog titles and report labels.
pub const APP_NAME: &str = "TranslucentTB";

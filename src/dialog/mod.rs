// SPDX-License-Identifier: GPL-3.0-or-later
//! Modal dialog controllers and the consumed host interface.

mod about;
pub mod host;

pub use about::{AboutDialog, DialogAction};

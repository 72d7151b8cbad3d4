// SPDX-License-Identifier: GPL-3.0-or-later
//! External hyperlink opening.

/// Opens external URLs with the system handler.
pub trait LinkOpener {
    /// Fire-and-forget open; no success signal is consumed.
    fn open(&self, url: &str);
}

/// Default opener delegating to the OS URL handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) {
        // No success signal to consume; a handler that fails to spawn is
        // ignored.
        let _ = open::that_detached(url);
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
//! The About dialog: informational body text, command links, and button
//! dispatch.
//!
//! The controller builds its [`DialogConfig`] once at construction, embedding
//! one diagnostic report in the body, then blocks on the host's modal run.
//! Button activations route through [`AboutDialog::handle_notification`],
//! which is also the seam the tests drive directly.

use crate::diagnostics::{build_report, Environment};
use crate::dialog::host::{
    CallbackResponse, CommandButton, DialogConfig, DialogHost, Notification,
};
use crate::platform::{Clipboard, ConfirmationPresenter, ErrorReporter, LinkOpener, Severity};
use crate::APP_NAME;

const DISCORD_URL: &str = "https://discord.gg/w95DGTK";
const DONATE_URL: &str = "https://liberapay.com/TranslucentTB";

const COPY_VERSION_ID: i32 = 40000;
const JOIN_DISCORD_ID: i32 = COPY_VERSION_ID + 1;
const DONATE_ID: i32 = JOIN_DISCORD_ID + 1;

const BUTTONS: &[CommandButton] = &[
    CommandButton {
        id: COPY_VERSION_ID,
        label: "Copy system info to clipboard\nUse this when filling a GitHub bug report.",
    },
    CommandButton {
        id: JOIN_DISCORD_ID,
        label: "Join our Discord server\nChat with the community and developers.",
    },
    CommandButton {
        id: DONATE_ID,
        label: "Donate\nSupport us developing TranslucentTB and bringing other great features to you!",
    },
];

const COPY_FAILED_CAPTION: &str = "Failed to copy version information!";

const LICENSE_PREAMBLE: &str = "This program is free (as in freedom) software, \
redistributed under the GPLv3. As such, the \
<A HREF=\"https://github.com/TranslucentTB/TranslucentTB/\">source code</A> is \
available for anyone to modify, inspect, compile, etc...";

const CONTRIBUTORS_LINE: &str = "Brought to you by \
<A HREF=\"https://github.com/TranslucentTB/TranslucentTB/graphs/contributors\">all its contributors</A>.";

const TRADEMARK_DISCLAIMER: &str = "All trademarks, product names, company names, \
logos, service marks, copyrights and/or trade dress mentioned, displayed, cited, \
or otherwise indicated are the property of their respective owners.";

/// Actions a button activation can dispatch to.
///
/// The closed set of variants maps bijectively onto the stable wire ids the
/// host reports back; the id exists only at the host boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    CopyVersionInfo,
    JoinCommunity,
    Donate,
}

impl DialogAction {
    /// Wire id of this action's button.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            DialogAction::CopyVersionInfo => COPY_VERSION_ID,
            DialogAction::JoinCommunity => JOIN_DISCORD_ID,
            DialogAction::Donate => DONATE_ID,
        }
    }

    /// Decodes a wire id back into an action. Unknown ids are not ours.
    #[must_use]
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            COPY_VERSION_ID => Some(DialogAction::CopyVersionInfo),
            JOIN_DISCORD_ID => Some(DialogAction::JoinCommunity),
            DONATE_ID => Some(DialogAction::Donate),
            _ => None,
        }
    }
}

/// Modal About dialog controller.
///
/// Owns its immutable configuration and the collaborators the button
/// callback dispatches to. The configuration cannot be mutated after
/// construction; [`AboutDialog::config`] hands out a shared reference only.
pub struct AboutDialog<E, C, L, R, P> {
    config: DialogConfig,
    env: E,
    clipboard: C,
    links: L,
    reporter: R,
    confirm: P,
}

impl<E, C, L, R, P> AboutDialog<E, C, L, R, P>
where
    E: Environment,
    C: Clipboard,
    L: LinkOpener,
    R: ErrorReporter,
    P: ConfirmationPresenter,
{
    /// Builds the dialog configuration, embedding one fresh diagnostic
    /// report in the body text.
    pub fn new(env: E, clipboard: C, links: L, reporter: R, confirm: P) -> Self {
        let config = DialogConfig {
            title: format!("About {APP_NAME}"),
            body: about_content(&env),
            buttons: BUTTONS,
            allow_cancellation: true,
            use_command_links: true,
            show_close_button: true,
        };

        Self {
            config,
            env,
            clipboard,
            links,
            reporter,
            confirm,
        }
    }

    /// The configuration handed to the host.
    #[must_use]
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Presents the dialog modally and returns once it is dismissed. The
    /// host's close verdict is of no interest here.
    pub fn run(&mut self, host: &mut dyn DialogHost) {
        let config = self.config.clone();
        let _ = host.run(&config, &mut |notification| {
            self.handle_notification(notification)
        });
    }

    /// Reacts to one host notification.
    ///
    /// Only button activations are acted upon; every other notification kind
    /// passes through untouched. Ids outside the three known actions are
    /// acknowledged as a no-op.
    pub fn handle_notification(&mut self, notification: Notification) -> CallbackResponse {
        match notification {
            Notification::ButtonClicked(id) => match DialogAction::from_id(id) {
                Some(DialogAction::CopyVersionInfo) => self.copy_version_info(),
                Some(DialogAction::JoinCommunity) => {
                    self.links.open(DISCORD_URL);
                    CallbackResponse::Continue
                }
                Some(DialogAction::Donate) => {
                    self.links.open(DONATE_URL);
                    CallbackResponse::Continue
                }
                None => CallbackResponse::Continue,
            },
            _ => CallbackResponse::Continue,
        }
    }

    fn copy_version_info(&mut self) -> CallbackResponse {
        // Rebuild rather than reuse the body's embedded copy so the
        // clipboard carries live values.
        let report = build_report(&self.env);
        match self.clipboard.set_text(&report) {
            Ok(()) => self.confirm.acknowledge(APP_NAME, "Copied."),
            Err(err) => self
                .reporter
                .report(Severity::Error, &format!("{COPY_FAILED_CAPTION} {err}")),
        }
        // The dialog stays open on both paths so the acknowledgement or the
        // error shows in place.
        CallbackResponse::Suppress
    }
}

/// Assembles the About body: license preamble, attribution links, one
/// embedded diagnostic report, and the trademark disclaimer.
fn about_content(env: &dyn Environment) -> String {
    format!(
        "{LICENSE_PREAMBLE}\n{CONTRIBUTORS_LINE}\n\n{}\n\n{TRADEMARK_DISCLAIMER}",
        build_report(env)
    )
}

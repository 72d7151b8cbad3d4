// SPDX-License-Identifier: GPL-3.0-or-later
//! Environment diagnostics: version facts and report assembly.
//!
//! [`build_report`] concatenates one labeled fact per diagnostic source into
//! a fixed-order, line-delimited text blob. The sources live behind the
//! [`Environment`] trait so the dialog can be exercised against fakes; the
//! production implementation is [`HostEnvironment`].

mod environment;
mod report;

pub use environment::{
    Environment, HookVersion, HostEnvironment, DETOURS_VERSION, JSON_LIB_VERSION,
};
pub use report::{build_report, BuildConfig, TargetArch, VersionFact};

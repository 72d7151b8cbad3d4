// SPDX-License-Identifier: GPL-3.0-or-later
//! Failure type shared by the fallible environment queries.

use std::fmt;

/// Failure of a single version/environment query.
///
/// Report assembly never propagates these: the rendered form is substituted
/// inline for the value that could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Bare OS failure code with no accompanying text.
    Code(i32),
    /// Descriptive failure text from the underlying API.
    Message(String),
}

impl QueryError {
    /// Maps an I/O error to the closest query failure: the raw OS code when
    /// one exists, its message otherwise.
    #[must_use]
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => QueryError::Code(code),
            None => QueryError::Message(err.to_string()),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Codes render as two's-complement hex, matching how the OS
            // documents them.
            QueryError::Code(code) => write!(f, "error 0x{code:08X}"),
            QueryError::Message(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for QueryError {}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy and process exit codes.
//!
//! Engine-level errors never abort the process. Only a history file that
//! exists but cannot be parsed stops startup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the workbench engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The pattern failed to compile.
    #[error("invalid regular expression: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Custom-template export was requested with an empty template.
    #[error("custom format string cannot be empty")]
    EmptyTemplate,

    /// Selected-groups export was requested with no group numbers.
    #[error("group numbers cannot be empty")]
    EmptySelector,

    /// A group selector entry or template placeholder is not a usable number.
    #[error("invalid group number: {0}")]
    InvalidGroupNumber(String),

    /// An export format name that is not recognized.
    #[error("unknown export format: {0}")]
    UnknownExportMode(String),

    /// Writing an export to its destination failed.
    #[error("failed to write export to {destination}: {source}")]
    Io {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// The history file exists but could not be read or parsed.
    #[error("failed to load history from {}: {message}", path.display())]
    HistoryLoad { path: PathBuf, message: String },

    /// The history file could not be written.
    #[error("failed to save history to {}: {message}", path.display())]
    HistorySave { path: PathBuf, message: String },

    /// Configuration file problem.
    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Initial text could not be read.
    #[error("failed to read input from {source_name}: {message}")]
    Input { source_name: String, message: String },
}

impl Error {
    /// True for errors that must stop the process before any work starts.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::HistoryLoad { .. } | Error::Config { .. })
    }

    /// True for export input validation failures, raised before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyTemplate
                | Error::EmptySelector
                | Error::InvalidGroupNumber(_)
                | Error::UnknownExportMode(_)
        )
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the `regexplore` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// `match --fail-on-empty` found nothing.
    NoMatches = 1,
    /// Bad pattern, export request, config, input, or history file.
    UsageError = 2,
    /// Unexpected failure.
    InternalError = 3,
}

impl ExitCode {
    /// Map an engine error to the exit code the binary reports for it.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::InvalidPattern { .. }
            | Error::EmptyTemplate
            | Error::EmptySelector
            | Error::InvalidGroupNumber(_)
            | Error::UnknownExportMode(_)
            | Error::HistoryLoad { .. }
            | Error::Config { .. }
            | Error::Input { .. } => ExitCode::UsageError,
            Error::Io { .. } | Error::HistorySave { .. } => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

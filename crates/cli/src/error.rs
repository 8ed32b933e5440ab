// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Storecheck error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Test-run results file does not exist
    #[error("test results file not found: {}", .path.display())]
    ResultsNotFound { path: PathBuf },

    /// Test-run results file is not a valid run record
    #[error("failed to parse test results: {}: {source}", .path.display())]
    ResultsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Test-run results file exists but cannot be read
    #[error("failed to read test results: {}: {source}", .path.display())]
    ResultsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more report sections could not be rendered
    #[error("report incomplete: {failed} of {total} render steps failed")]
    RenderIncomplete { failed: usize, total: usize },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using storecheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Report generated
    Success = 0,
    /// Results file missing or unreadable
    InputError = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error, including failed render steps
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ResultsNotFound { .. }
            | Error::ResultsRead { .. }
            | Error::ResultsParse { .. } => ExitCode::InputError,
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::RenderIncomplete { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use thiserror::Error;
use wrench_headless_core::HeadlessError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required build dependency was not found.
    #[error("{0}")]
    Dependency(String),

    /// IO error (missing build directory entries, unreadable screenshot, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// An external program failed; `code` is its exit code when it had one.
    #[error("Process error: {message}")]
    Process { message: String, code: Option<i32> },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// A failed child's own exit code is passed through; everything else
    /// uses the sysexits.h categories.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Dependency(_) => 69, // EX_UNAVAILABLE
            CliError::Io(_) => 74,         // EX_IOERR
            CliError::Process { code, .. } => match code {
                Some(c) if *c != 0 => *c,
                _ => 71, // EX_OSERR
            },
        }
    }
}

impl From<HeadlessError> for CliError {
    fn from(err: HeadlessError) -> Self {
        let message = err.to_string();
        match err {
            HeadlessError::DependencyNotFound { .. } => CliError::Dependency(message),
            HeadlessError::FilesystemAccess { .. } | HeadlessError::InvalidSearchPath { .. } => {
                CliError::Io(message)
            }
            HeadlessError::ProcessSpawn { .. } => CliError::Process {
                message,
                code: None,
            },
            HeadlessError::ProcessFailed { code, .. } => CliError::Process { message, code },
        }
    }
}

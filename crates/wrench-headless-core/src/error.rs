//! Error types for headless wrench runs.
//!
//! Every failure aborts the whole invocation; nothing here is recovered
//! locally, so the variants only need to carry enough context for a useful
//! message and an exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving dependencies or launching processes.
#[derive(Debug, Error)]
pub enum HeadlessError {
    // === Resolution ===
    /// No `<package>-*` entry exists in the build directory
    #[error("Dependency '{package}' not found in {build_dir}. Build wrench with the headless feature first.")]
    DependencyNotFound { package: String, build_dir: PathBuf },

    /// The build directory or one of its entries could not be read
    #[error("Cannot access {path}: {source}")]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A library directory cannot be placed in a loader search path
    #[error("Cannot build library search path from {paths:?}: {source}")]
    InvalidSearchPath {
        paths: Vec<PathBuf>,
        #[source]
        source: std::env::JoinPathsError,
    },

    // === External processes ===
    /// The program could not be started at all
    #[error("Failed to launch '{program}': {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but did not exit successfully
    #[error("'{program}' exited unsuccessfully ({})", describe_code(*.code))]
    ProcessFailed { program: String, code: Option<i32> },
}

impl HeadlessError {
    /// Create a `FilesystemAccess` error for a path
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FilesystemAccess {
            path: path.into(),
            source,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |c| format!("exit code {c}"),
    )
}

/// Result type alias for headless operations
pub type HeadlessResult<T> = Result<T, HeadlessError>;

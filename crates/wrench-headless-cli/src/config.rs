//! Runtime configuration assembled at the composition root.

use std::path::PathBuf;

use wrench_headless_core::PlatformKind;

use crate::parser::Cli;

/// Everything the handlers need to know about the environment they run in.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the wrench binary.
    pub wrench_bin: PathBuf,
    /// Cargo executable used for the build step.
    pub cargo: String,
    /// Platform detected at startup.
    pub platform: PlatformKind,
}

impl CliConfig {
    /// Build the config from parsed arguments.
    ///
    /// `WRENCH_BIN` and `CARGO` are already folded in by clap, after
    /// `.env` has been loaded.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            wrench_bin: cli.wrench_bin.clone(),
            cargo: cli.cargo.clone(),
            platform: PlatformKind::current(),
        }
    }
}

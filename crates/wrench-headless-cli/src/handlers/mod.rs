//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(config: &CliConfig, ...) -> Result<(), CliError>`
//! - Compute the environment with `wrench_headless_core::configure`
//! - Apply it only to the processes they launch

pub mod env;
pub mod reftest;
pub mod run;

use std::process::Command;

use crate::config::CliConfig;

/// `wrench -h`, the headless invocation every handler starts from.
pub(crate) fn wrench_command(config: &CliConfig) -> Command {
    let mut cmd = Command::new(&config.wrench_bin);
    cmd.arg("-h");
    cmd
}

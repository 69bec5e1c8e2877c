//! Run command handler: build wrench headless and launch it.

use tracing::info;
use wrench_headless_core::configure;
use wrench_headless_core::process::{cargo_build_command, run_checked};

use crate::config::CliConfig;
use crate::error::CliError;

use super::wrench_command;

/// Arguments for the run command.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub skip_build: bool,
    pub features: Vec<String>,
    pub args: Vec<String>,
}

/// Execute the run command.
///
/// Builds wrench in release mode with the requested features, then runs
/// `wrench -h <args>` with the software-rendering environment.
pub fn execute(config: &CliConfig, args: RunArgs) -> Result<(), CliError> {
    if args.skip_build {
        info!("Skipping build");
    } else {
        run_checked(&mut cargo_build_command(&config.cargo, &args.features))?;
    }

    let overrides = configure(config.platform, &config.wrench_bin)?;

    let mut cmd = wrench_command(config);
    cmd.args(&args.args);
    overrides.apply_to(&mut cmd);
    run_checked(&mut cmd)?;

    Ok(())
}

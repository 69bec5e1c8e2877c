//! Env command handler.
//!
//! Displays the environment overrides for diagnostics, without launching
//! anything.

use wrench_headless_core::{PlatformKind, configure};

use crate::config::CliConfig;
use crate::error::CliError;

/// Render the text the env command prints.
///
/// One `KEY=VALUE` line per variable that would be set for wrench, or a note
/// when the platform has no software rendering setup.
pub fn render(config: &CliConfig, platform: Option<PlatformKind>) -> Result<String, CliError> {
    let platform = platform.unwrap_or(config.platform);
    if !platform.supports_software_rendering() {
        return Ok(format!(
            "# Software rendering is not configured on {platform}; wrench inherits the current environment\n"
        ));
    }

    Ok(configure(platform, &config.wrench_bin)?.to_string())
}

/// Execute the env command.
pub fn execute(config: &CliConfig, platform: Option<PlatformKind>) -> Result<(), CliError> {
    print!("{}", render(config, platform)?);
    Ok(())
}

//! Reftest command handler.
//!
//! Renders a single frame with `wrench show`, runs the reftest suite, then
//! prints the MD5 of the screenshot so runs can be compared by eye.

use std::path::PathBuf;
use std::process::Command;

use wrench_headless_core::configure;
use wrench_headless_core::digest::{SCREENSHOT_FILE, md5_hex};
use wrench_headless_core::process::run_checked;

use crate::config::CliConfig;
use crate::error::CliError;

use super::wrench_command;

/// Execute the reftest command.
///
/// `screenshot` defaults to `screenshot.png` in the current directory,
/// which is where wrench writes it.
pub fn execute(config: &CliConfig, path: &str, screenshot: Option<PathBuf>) -> Result<(), CliError> {
    let overrides = configure(config.platform, &config.wrench_bin)?;

    let mut show = Command::new(&config.wrench_bin);
    show.args(["-t", "1", "-h", "show", path]);
    overrides.apply_to(&mut show);
    run_checked(&mut show)?;

    let mut reftest = wrench_command(config);
    reftest.arg("reftest");
    overrides.apply_to(&mut reftest);
    run_checked(&mut reftest)?;

    let screenshot = screenshot.unwrap_or_else(|| PathBuf::from(SCREENSHOT_FILE));
    println!("md5 = {}", md5_hex(&screenshot)?);
    Ok(())
}

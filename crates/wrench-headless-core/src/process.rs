//! Launching external programs.
//!
//! Every external step either succeeds or aborts the run; there is no retry.

use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::error::{HeadlessError, HeadlessResult};

/// Render a command line for logs and error messages.
pub fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn program_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().into_owned()
}

/// Map an exit status to `Ok` or `ProcessFailed`.
pub fn check_status(program: &str, status: ExitStatus) -> HeadlessResult<()> {
    if status.success() {
        Ok(())
    } else {
        Err(HeadlessError::ProcessFailed {
            program: program.to_string(),
            code: status.code(),
        })
    }
}

/// Run `cmd` to completion with inherited stdio and require a zero exit status.
pub fn run_checked(cmd: &mut Command) -> HeadlessResult<()> {
    let program = program_name(cmd);
    debug!(command = %describe(cmd), "Running");

    let status = cmd.status().map_err(|source| HeadlessError::ProcessSpawn {
        program: program.clone(),
        source,
    })?;

    check_status(&program, status)
}

/// `cargo build --release --features headless`
pub fn cargo_build_command(cargo: &str, features: &[String]) -> Command {
    let mut cmd = Command::new(cargo);
    cmd.args(["build", "--release"]);
    if !features.is_empty() {
        cmd.arg("--features").arg(features.join(","));
    }
    cmd
}

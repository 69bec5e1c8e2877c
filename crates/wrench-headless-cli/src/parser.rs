//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Default location of the wrench binary, relative to the wrench crate directory.
pub const DEFAULT_WRENCH_BIN: &str = "../target/release/wrench";

/// Run wrench headless with OSMesa software rendering.
///
/// The `osmesa-src` build output next to the wrench binary is located
/// automatically and exposed to wrench through the dynamic loader path.
#[derive(Parser)]
#[command(name = "wrench-headless")]
#[command(version)]
pub struct Cli {
    /// Path to the wrench binary
    #[arg(long = "wrench-bin", env = "WRENCH_BIN", default_value = DEFAULT_WRENCH_BIN, global = true)]
    pub wrench_bin: PathBuf,

    /// Cargo executable used to build wrench
    #[arg(long, env = "CARGO", default_value = "cargo", global = true)]
    pub cargo: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "wrench-headless",
            "--verbose",
            "--wrench-bin",
            "/tmp/wrench",
            "env",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.wrench_bin, PathBuf::from("/tmp/wrench"));
    }
}

//! Subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use wrench_headless_core::PlatformKind;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build wrench with the headless feature and run it with the given arguments
    Run {
        /// Use the existing wrench binary instead of building it first
        #[arg(long)]
        skip_build: bool,

        /// Cargo features to enable for the build
        #[arg(long, value_delimiter = ',', default_value = "headless")]
        features: Vec<String>,

        /// Arguments passed through to wrench after `-h`.
        ///
        /// Put them after `--` when they start with a flag this tool also
        /// understands, e.g. `run -- -v reftest`.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Render a frame, run the reftests and print the screenshot digest
    Reftest {
        /// File passed to `wrench show`
        path: String,

        /// Image to hash after the run [default: ./screenshot.png]
        #[arg(long)]
        screenshot: Option<PathBuf>,
    },

    /// Print the environment that would be set for wrench
    Env {
        /// Platform to compute the environment for (linux, macos, windows, other)
        #[arg(long)]
        platform: Option<PlatformKind>,
    },
}

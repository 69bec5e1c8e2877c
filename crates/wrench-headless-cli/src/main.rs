//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging and dispatches to a
//! handler. Errors are printed once here and turned into the exit code.

use clap::Parser;

use wrench_headless_cli::handlers::{self, run::RunArgs};
use wrench_headless_cli::{Cli, CliConfig, CliError, Commands, logging};

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(&cli);
    tracing::debug!(?config, "Starting");

    match cli.command {
        Commands::Run {
            skip_build,
            features,
            args,
        } => handlers::run::execute(
            &config,
            RunArgs {
                skip_build,
                features,
                args,
            },
        ),
        Commands::Reftest { path, screenshot } => {
            handlers::reftest::execute(&config, &path, screenshot)
        }
        Commands::Env { platform } => handlers::env::execute(&config, platform),
    }
}

fn main() {
    // Load environment variables before clap reads WRENCH_BIN / CARGO
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = dispatch(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

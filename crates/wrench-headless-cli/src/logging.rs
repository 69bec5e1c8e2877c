//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the digest line.
///
/// `RUST_LOG` takes precedence; otherwise `warn`, or `debug` for our own
/// crates when `verbose` is set.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "warn,wrench_headless_core=debug,wrench_headless_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

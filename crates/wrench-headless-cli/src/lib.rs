//! Command-line front end for running wrench headless.
#![deny(unsafe_code)]

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use config::CliConfig;
pub use error::CliError;
pub use parser::Cli;

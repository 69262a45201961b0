//! # Greeter - Main Entry Point
//!
//! ## Startup Sequence
//!
//! 1. **Arguments** - Parse the command line
//! 2. **Configuration** - Load the config file, or defaults when none exists
//! 3. **Tracing** - Install the subscriber at the configured level
//! 4. **Dispatch** - Run the command
//!
//! ## Exit Status
//!
//! `0` when the command succeeded, `1` when input was rejected or the
//! configuration could not be loaded.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use greeter::cli::Cli;
use greeter::commands::{Context, execute_command};
use greeter_core::{GreeterConfig, LogLevel};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = GreeterConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    init_tracing(cli.log_level.unwrap_or(config.log_level));
    tracing::debug!(?config, "configuration ready");

    let ctx = Context::new(config, cli.format);
    execute_command(cli.command, &ctx)
}

/// Initialize tracing. `RUST_LOG` overrides the requested level.
fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

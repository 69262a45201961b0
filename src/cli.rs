//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use greeter_core::{Language, LogLevel};

/// Greeter - validated welcome messages
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version)]
#[command(about = "Validate names and welcome people in style")]
#[command(
    long_about = "Greeter validates names against configurable rules and renders welcome messages in several styles and languages. Validation failures exit with status 1."
)]
pub struct Cli {
    /// Config file path (default: XDG config dir, then ./greeter.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG wins
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a name and print a welcome message
    Greet {
        /// Name to greet
        name: String,

        /// Greeting style (formal, casual, professional, enthusiastic)
        #[arg(short, long)]
        style: Option<String>,

        /// Greet in another language
        #[arg(short, long)]
        language: Option<Language>,

        /// Greet by time of day
        #[arg(short, long, default_value_t = false)]
        time: bool,

        /// Strip markup and collapse whitespace before validating
        #[arg(long, default_value_t = false)]
        sanitize: bool,
    },

    /// Validate a name without greeting
    Check {
        /// Name to check
        name: String,

        /// Report every broken rule instead of the first
        #[arg(short, long, default_value_t = false)]
        all: bool,
    },

    /// Welcome many names and summarize the run
    Batch {
        /// Names to greet
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List greeting styles
    Styles,
}

//! ctable CLI - main entry point.
//!
//! - `ctable render <FILE>` renders a TOML table document to stdout
//! - `ctable pattern <PATTERN> <WIDTH>` prints a border pattern expansion
//!
//! Diagnostics go to stderr so rendered output stays clean.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ctable_cli::cli::{dispatch_command, Cli, LogLevel};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.requested_log_level() {
        Some(level) => EnvFilter::new(level.as_filter_str()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LogLevel::default().as_filter_str())),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    dispatch_command(cli)
}

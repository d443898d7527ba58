//! Binary crate for the `numbeo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Resolving the API key before any network activity
//! - Printing the report to stdout and diagnostics to stderr

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}

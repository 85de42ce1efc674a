//! pivotgen
//!
//! Pivot table migration generator.
//!
//! This is the binary entry point: it parses arguments, sets up logging on
//! stderr and hands off to the CLI crate.

use anyhow::Result;
use pivotgen_cli::{Cli, Parser};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = pivotgen_cli::VERSION, "starting pivotgen");

    pivotgen_cli::run(cli)
}

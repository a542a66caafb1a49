//! Matchat - toy YES/NO chat oracle CLI
//!
//! A deterministic demo classifier that answers YES or NO based on
//! linear-algebra statistics of a character-code matrix.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = matchat::cli::Cli::parse();

    // Initialize logging; RUST_LOG overrides --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    matchat::cli::run(cli)
}

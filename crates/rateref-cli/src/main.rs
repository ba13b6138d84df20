//! rateref CLI - overnight index conventions and holiday calendars.
//!
//! # Usage
//!
//! ```bash
//! # List the registered overnight indices
//! rateref list
//!
//! # Show one index, by name or alternate name
//! rateref show SOFR
//!
//! # Fixing, publication, effective and maturity dates
//! rateref dates CHF-TOIS --date 2025-07-31
//!
//! # Check a holiday calendar
//! rateref calendar GBLO --date 2025-12-25 --shift 2
//!
//! # Add indices from a definition file
//! rateref --definitions indices.toml list
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use rateref_index::IndexDefinitions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Definitions must be registered before the first lookup
    if let Some(path) = &cli.definitions {
        IndexDefinitions::load(path)
            .and_then(IndexDefinitions::register)
            .with_context(|| format!("loading definitions from {}", path.display()))?;
    }

    let format = cli.format;

    match cli.command {
        Commands::List(args) => commands::list::execute(args, format)?,
        Commands::Show(args) => commands::show::execute(args, format)?,
        Commands::Dates(args) => commands::dates::execute(args, format)?,
        Commands::Calendar(args) => commands::calendar::execute(args, format)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

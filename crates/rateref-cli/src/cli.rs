//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CalendarArgs, DatesArgs, ListArgs, ShowArgs};

/// rateref - Overnight index conventions and holiday calendars
#[derive(Parser)]
#[command(name = "rateref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// TOML file with additional index and calendar definitions
    #[arg(long, env = "RATEREF_DEFINITIONS", global = true)]
    pub definitions: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List registered overnight indices
    List(ListArgs),

    /// Show the full definition of an index
    Show(ShowArgs),

    /// Compute fixing, publication, effective and maturity dates
    Dates(DatesArgs),

    /// Check business days on a holiday calendar
    Calendar(CalendarArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}

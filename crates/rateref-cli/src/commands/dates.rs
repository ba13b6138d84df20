//! Dates command implementation.

use clap::{Args, ValueEnum};
use tracing::debug;

use rateref_index::{IndexDates, OvernightIndex, RateIndex};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliError;
use crate::output::{print_header, print_output, print_single, print_warning, KeyValue};

/// Arguments for the dates command.
#[derive(Args, Debug)]
pub struct DatesArgs {
    /// Index name or alternate name
    pub name: String,

    /// Input date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Which date of the chain the input is
    #[arg(long, value_enum, default_value = "fixing")]
    pub from: DateRole,
}

/// Role of the input date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateRole {
    /// The fixing (observation) date
    Fixing,
    /// The effective (deposit start) date
    Effective,
}

/// Executes the dates command.
pub fn execute(args: DatesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let index = OvernightIndex::of(&args.name).map_err(CliError::from)?;
    let date = parse_date(&args.date)?;

    let dates = match args.from {
        DateRole::Fixing => index.date_chain(date),
        DateRole::Effective => index.date_chain_from_effective(date),
    };
    debug!(index = index.name(), %date, ?dates, "computed date chain");

    let anchor = match args.from {
        DateRole::Fixing => dates.fixing,
        DateRole::Effective => dates.effective,
    };
    if anchor != date {
        print_warning(&format!(
            "{date} is not a business day on {}, rolled forward to {anchor}",
            index.fixing_calendar().name()
        ));
    }

    match format {
        OutputFormat::Json => print_single(&dates),
        OutputFormat::Table => {
            print_header(index.name());
            print_output(&rows(&dates), format)
        }
    }
}

fn rows(dates: &IndexDates) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Fixing", dates.fixing),
        KeyValue::new("Publication", dates.publication),
        KeyValue::new("Effective", dates.effective),
        KeyValue::new("Maturity", dates.maturity),
    ]
}

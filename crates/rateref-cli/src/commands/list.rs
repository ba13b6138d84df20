//! List command implementation.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rateref_core::Currency;
use rateref_index::{OvernightIndex, RateIndex};

use crate::cli::OutputFormat;
use crate::output::print_output;

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list indices in this currency (e.g., GBP)
    #[arg(short, long)]
    pub currency: Option<String>,
}

/// One row of the index listing.
#[derive(Debug, Serialize, Tabled)]
struct IndexRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Day Count")]
    day_count: String,
    #[tabled(rename = "Calendar")]
    calendar: String,
    #[tabled(rename = "Publication")]
    publication_offset: u32,
    #[tabled(rename = "Effective")]
    effective_offset: u32,
}

impl From<&OvernightIndex> for IndexRow {
    fn from(index: &OvernightIndex) -> Self {
        Self {
            name: index.name().to_string(),
            currency: index.currency().to_string(),
            day_count: index.day_count().to_string(),
            calendar: index.fixing_calendar().name().to_string(),
            publication_offset: index.publication_offset(),
            effective_offset: index.effective_offset(),
        }
    }
}

/// Executes the list command.
pub fn execute(args: ListArgs, format: OutputFormat) -> anyhow::Result<()> {
    let currency = args
        .currency
        .as_deref()
        .map(str::parse::<Currency>)
        .transpose()?;

    let rows: Vec<IndexRow> = OvernightIndex::all()?
        .into_iter()
        .filter(|index| currency.map_or(true, |ccy| index.currency() == ccy))
        .map(IndexRow::from)
        .collect();

    print_output(&rows, format)
}

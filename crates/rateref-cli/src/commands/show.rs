//! Show command implementation.

use clap::Args;
use serde::Serialize;

use rateref_index::{Index, OvernightIndex, RateIndex};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Index name or alternate name (e.g., GBP-SONIA, SOFR)
    pub name: String,
}

#[derive(Debug, Serialize)]
struct IndexDetails<'a> {
    name: &'a str,
    standard_id: String,
    currency: String,
    day_count: String,
    fixing_calendar: &'a str,
    tenor: String,
    publication_offset: u32,
    effective_offset: u32,
    alternate_names: Vec<String>,
}

/// Executes the show command.
pub fn execute(args: ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let index = OvernightIndex::of(&args.name).map_err(CliError::from)?;
    let alternate_names = OvernightIndex::registry()
        .alternate_names()?
        .into_iter()
        .filter(|(_, canonical)| canonical == index.name())
        .map(|(alias, _)| alias)
        .collect::<Vec<_>>();

    let details = IndexDetails {
        name: index.name(),
        standard_id: index.standard_id().to_string(),
        currency: index.currency().to_string(),
        day_count: index.day_count().to_string(),
        fixing_calendar: index.fixing_calendar().name(),
        tenor: index.tenor().to_string(),
        publication_offset: index.publication_offset(),
        effective_offset: index.effective_offset(),
        alternate_names,
    };

    match format {
        OutputFormat::Json => print_single(&details),
        OutputFormat::Table => {
            print_header(details.name);
            let rows = vec![
                KeyValue::new("Standard ID", &details.standard_id),
                KeyValue::new("Currency", &details.currency),
                KeyValue::new("Day Count", &details.day_count),
                KeyValue::new("Fixing Calendar", details.fixing_calendar),
                KeyValue::new("Tenor", &details.tenor),
                KeyValue::new("Publication Offset", details.publication_offset),
                KeyValue::new("Effective Offset", details.effective_offset),
                KeyValue::new("Alternate Names", details.alternate_names.join(", ")),
            ];
            print_output(&rows, format)
        }
    }
}

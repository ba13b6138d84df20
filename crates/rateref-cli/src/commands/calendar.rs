//! Calendar command implementation.

use clap::Args;
use serde::Serialize;

use rateref_core::calendars::{Calendar, HolidayCalendar};
use rateref_core::Date;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliError;
use crate::output::{print_header, print_output, print_single, yes_no, KeyValue};

/// Arguments for the calendar command.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Calendar identifier (e.g., GBLO, USNY, TARGET)
    pub id: String,

    /// Date to check (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Business days to shift by (negative moves backward)
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub shift: i32,
}

#[derive(Debug, Serialize)]
struct CalendarCheck<'a> {
    calendar: &'a str,
    date: Date,
    business_day: bool,
    next_or_same: Date,
    previous_or_same: Date,
    shift: i32,
    shifted: Date,
}

/// Executes the calendar command.
pub fn execute(args: CalendarArgs, format: OutputFormat) -> anyhow::Result<()> {
    let calendar = HolidayCalendar::of(&args.id).map_err(CliError::from)?;
    let date = parse_date(&args.date)?;

    let check = CalendarCheck {
        calendar: calendar.name(),
        date,
        business_day: calendar.is_business_day(date),
        next_or_same: calendar.next_or_same(date),
        previous_or_same: calendar.previous_or_same(date),
        shift: args.shift,
        shifted: calendar.shift(date, args.shift),
    };

    match format {
        OutputFormat::Json => print_single(&check),
        OutputFormat::Table => {
            print_header(&format!("{} {}", check.calendar, check.date));
            let rows = vec![
                KeyValue::new("Business Day", yes_no(check.business_day)),
                KeyValue::new("Next or Same", check.next_or_same),
                KeyValue::new("Previous or Same", check.previous_or_same),
                KeyValue::new(format!("Shifted {:+}", check.shift), check.shifted),
            ];
            print_output(&rows, format)
        }
    }
}

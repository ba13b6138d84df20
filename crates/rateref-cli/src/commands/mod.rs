//! CLI command implementations.

pub mod calendar;
pub mod dates;
pub mod list;
pub mod show;

pub use calendar::CalendarArgs;
pub use dates::DatesArgs;
pub use list::ListArgs;
pub use show::ShowArgs;

use rateref_core::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

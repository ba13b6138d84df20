//! Index capabilities.

use std::fmt;

use rateref_core::calendars::HolidayCalendar;
use rateref_core::daycounts::DayCountConvention;
use rateref_core::{Currency, StandardId, Tenor};

/// Scheme of the standard identifier of every index.
pub const INDEX_SCHEME: &str = "OG-Index";

/// A named market index.
///
/// The name is the textual identity of the index: the persisted form of an
/// index is exactly its name, and [`fmt::Display`] writes it.
pub trait Index: fmt::Display + Send + Sync {
    /// The unique name, such as `GBP-SONIA`.
    fn name(&self) -> &str;

    /// The standard identifier, `OG-Index~<name>`.
    fn standard_id(&self) -> &StandardId;
}

/// An index of interest rates.
pub trait RateIndex: Index {
    /// Currency of the rate.
    fn currency(&self) -> Currency;

    /// Day count used to accrue the rate.
    fn day_count(&self) -> DayCountConvention;

    /// Calendar determining valid fixing dates.
    fn fixing_calendar(&self) -> &HolidayCalendar;

    /// Deposit period of the rate.
    fn tenor(&self) -> Tenor;
}

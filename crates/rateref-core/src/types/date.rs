//! Calendar date type.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RateRefError, RateRefResult};

/// A calendar date used for fixing, publication, effective and maturity dates.
///
/// Newtype over `chrono::NaiveDate`. Serializes as an ISO 8601 string.
///
/// # Example
///
/// ```rust
/// use rateref_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 13).unwrap();
/// assert!(!date.add_days(1).is_weekday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// The earliest representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// The latest representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `RateRefError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> RateRefResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| RateRefError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `RateRefError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> RateRefResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| RateRefError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of calendar days. Negative values move backward.
    ///
    /// Saturates at [`Date::MIN`] and [`Date::MAX`].
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        match self.checked_add_days(days) {
            Some(date) => date,
            None if days < 0 => Date::MIN,
            None => Date::MAX,
        }
    }

    /// Adds a number of calendar days, or `None` outside the representable range.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
    }

    /// Number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the date is Monday through Friday.
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = RateRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date: Date = "2025-06-15".parse().unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert!(Date::parse("15/06/2025").is_err());
    }

    #[test]
    fn test_weekday_detection() {
        let friday = Date::from_ymd(2025, 1, 3).unwrap();
        assert!(friday.is_weekday());
        assert_eq!(friday.weekday(), Weekday::Fri);

        let saturday = friday.add_days(1);
        assert!(saturday.is_weekend());
        assert!(saturday.add_days(1).is_weekend());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2024, 2, 28).unwrap();
        let d2 = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 2);
        assert_eq!(d2.days_between(&d1), -2);
        assert_eq!(d1.days_in_year(), 366);
    }

    #[test]
    fn test_display_and_serde() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(date.to_string(), "2025-06-05");

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-05\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(Date::MAX.add_days(1), Date::MAX);
        assert_eq!(Date::MIN.add_days(-1), Date::MIN);
        assert_eq!(Date::MAX.checked_add_days(1), None);
        assert_eq!(Date::MIN.checked_add_days(i64::MIN), None);

        let date = Date::from_ymd(2025, 1, 6).unwrap();
        assert_eq!(date.add_days(i64::MAX), Date::MAX);
        assert_eq!(date.add_days(i64::MIN), Date::MIN);
        assert_eq!(date.checked_add_days(-6), Some(Date::from_ymd(2024, 12, 31).unwrap()));
    }
}

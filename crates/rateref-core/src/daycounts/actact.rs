//! Actual/Actual ISDA day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA.
///
/// Days falling in leap years are divided by 366, the others by 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl ActActIsda {
    fn forward_fraction(start: Date, end: Date) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut current = start;

        while current.year() < end.year() {
            // First day of the following year, reached by stepping past Dec 31.
            let next_year_start = current.add_days(
                i64::from(current.days_in_year()) - i64::from(day_of_year(current)) + 1,
            );
            let days = current.days_between(&next_year_start);
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
            current = next_year_start;
        }

        let days = current.days_between(&end);
        total + Decimal::from(days) / Decimal::from(current.days_in_year())
    }
}

fn day_of_year(date: Date) -> u32 {
    chrono::Datelike::ordinal(&date.as_naive_date())
}

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start <= end {
            Self::forward_fraction(start, end)
        } else {
            -Self::forward_fraction(end, start)
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_years() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(ActActIsda.year_fraction(start, end), dec!(2));
    }

    #[test]
    fn test_spanning_leap_boundary() {
        let start = Date::from_ymd(2023, 12, 31).unwrap();
        let end = Date::from_ymd(2024, 1, 2).unwrap();
        let expected = dec!(1) / dec!(365) + dec!(1) / dec!(366);
        assert_eq!(ActActIsda.year_fraction(start, end), expected);
    }

    #[test]
    fn test_reversed_is_negative() {
        let start = Date::from_ymd(2025, 3, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();
        assert_eq!(
            ActActIsda.year_fraction(start, end),
            -ActActIsda.year_fraction(end, start)
        );
    }
}

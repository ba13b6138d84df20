//! Holiday rules and set-backed calendars.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

use super::{Calendar, WeekendType};
use crate::types::Date;

/// First year for which rule-based holidays are generated.
pub const MIN_YEAR: i32 = 1970;
/// Last year for which rule-based holidays are generated.
pub const MAX_YEAR: i32 = 2100;

/// How a fixed-date holiday falling on a weekend is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// Only the date itself; a weekend holiday is simply lost.
    Actual,
    /// Saturday moves to Friday, Sunday moves to Monday.
    NearestWeekday,
    /// Sunday moves to Monday; Saturday is lost.
    SundayToMonday,
    /// Saturday and Sunday both move to the following Monday.
    NextMonday,
}

impl Observance {
    fn apply(self, date: NaiveDate) -> Option<NaiveDate> {
        let weekday = date.weekday();
        match (self, weekday) {
            (Observance::NearestWeekday, Weekday::Sat) => date.pred_opt(),
            (Observance::NearestWeekday | Observance::SundayToMonday, Weekday::Sun) => {
                date.succ_opt()
            }
            (Observance::NextMonday, Weekday::Sat) => date.checked_add_days(chrono::Days::new(2)),
            (Observance::NextMonday, Weekday::Sun) => date.succ_opt(),
            (Observance::SundayToMonday, Weekday::Sat) => None,
            _ => Some(date),
        }
    }
}

/// A calendar backed by an explicit set of holiday dates plus weekend days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySetCalendar {
    name: String,
    weekend: WeekendType,
    holidays: BTreeSet<NaiveDate>,
}

impl HolidaySetCalendar {
    /// Creates a calendar from a list of holiday dates.
    pub fn from_dates(
        name: impl Into<String>,
        weekend: WeekendType,
        holidays: impl IntoIterator<Item = Date>,
    ) -> Self {
        Self {
            name: name.into(),
            weekend,
            holidays: holidays.into_iter().map(|d| d.as_naive_date()).collect(),
        }
    }

    /// The weekend days of this calendar.
    pub fn weekend(&self) -> WeekendType {
        self.weekend
    }

    /// Number of explicit holidays, weekends excluded.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Holidays falling in the given year, in date order.
    pub fn holidays_in_year(&self, year: i32) -> Vec<Date> {
        let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return Vec::new();
        };
        self.holidays
            .range(start..=end)
            .map(|d| Date::from(*d))
            .collect()
    }
}

impl Calendar for HolidaySetCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        let naive = date.as_naive_date();
        !self.weekend.is_weekend(naive.weekday()) && !self.holidays.contains(&naive)
    }
}

/// Builder generating a [`HolidaySetCalendar`] from recurring holiday rules.
///
/// ```rust
/// use rateref_core::calendars::{Calendar, HolidayRules, Observance};
/// use rateref_core::types::Date;
///
/// let cal = HolidayRules::new("Example")
///     .year_range(2025, 2025)
///     .fixed(1, 1, Observance::Actual)
///     .easter(-2)
///     .build();
/// assert!(!cal.is_business_day(Date::from_ymd(2025, 4, 18).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayRules {
    name: String,
    weekend: WeekendType,
    start_year: i32,
    end_year: i32,
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayRules {
    /// Starts a rule set covering `MIN_YEAR..=MAX_YEAR`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weekend: WeekendType::SaturdaySunday,
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
            holidays: BTreeSet::new(),
        }
    }

    /// Sets the weekend type.
    pub fn weekend(mut self, weekend: WeekendType) -> Self {
        self.weekend = weekend;
        self
    }

    /// Restricts the years for which rules generate holidays.
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start.max(MIN_YEAR);
        self.end_year = end.min(MAX_YEAR);
        self
    }

    fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    /// Adds one-off holidays.
    pub fn dates(mut self, dates: impl IntoIterator<Item = (i32, u32, u32)>) -> Self {
        self.holidays.extend(
            dates
                .into_iter()
                .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        );
        self
    }

    /// Same month and day every year.
    pub fn fixed(self, month: u32, day: u32, observance: Observance) -> Self {
        let from = self.start_year;
        self.fixed_from(month, day, from, observance)
    }

    /// Same month and day every year starting from `from_year`.
    pub fn fixed_from(
        mut self,
        month: u32,
        day: u32,
        from_year: i32,
        observance: Observance,
    ) -> Self {
        for year in from_year.max(self.start_year)..=self.end_year {
            if let Some(date) =
                NaiveDate::from_ymd_opt(year, month, day).and_then(|d| observance.apply(d))
            {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// The `occurrence`-th given weekday of a month (1-based).
    pub fn nth_weekday(mut self, month: u32, weekday: Weekday, occurrence: u32) -> Self {
        for year in self.years() {
            if let Some(date) = nth_weekday_of_month(year, month, weekday, occurrence) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// The last given weekday of a month.
    pub fn last_weekday(mut self, month: u32, weekday: Weekday) -> Self {
        for year in self.years() {
            if let Some(date) = last_weekday_of_month(year, month, weekday) {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// A day offset from Easter Sunday (Good Friday is -2, Easter Monday is 1).
    pub fn easter(mut self, offset_days: i64) -> Self {
        for year in self.years() {
            if let Some(date) = easter_sunday(year)
                .and_then(|e| e.checked_add_signed(chrono::Duration::days(offset_days)))
            {
                self.holidays.insert(date);
            }
        }
        self
    }

    /// Holidays produced by an arbitrary per-year generator.
    pub fn custom<F>(mut self, generator: F) -> Self
    where
        F: Fn(i32) -> Vec<NaiveDate>,
    {
        for year in self.years() {
            self.holidays.extend(generator(year));
        }
        self
    }

    /// Builds the calendar.
    pub fn build(self) -> HolidaySetCalendar {
        HolidaySetCalendar {
            name: self.name,
            weekend: self.weekend,
            holidays: self.holidays,
        }
    }
}

/// The `n`-th occurrence (1-based) of a weekday in a month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let date = NaiveDate::from_ymd_opt(year, month, 1 + offset + (n - 1) * 7)?;
    (date.month() == month).then_some(date)
}

/// The last occurrence of a weekday in a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last.checked_sub_days(chrono::Days::new(u64::from(back)))
}

/// Easter Sunday in the Gregorian calendar (anonymous Gregorian algorithm).
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter() {
        assert_eq!(easter_sunday(2024), Some(ymd(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(ymd(2026, 4, 5)));
    }

    #[test]
    fn test_nth_and_last_weekday() {
        assert_eq!(
            nth_weekday_of_month(2025, 1, Weekday::Mon, 3),
            Some(ymd(2025, 1, 20))
        );
        assert_eq!(
            nth_weekday_of_month(2025, 11, Weekday::Thu, 4),
            Some(ymd(2025, 11, 27))
        );
        assert_eq!(nth_weekday_of_month(2025, 2, Weekday::Mon, 5), None);
        assert_eq!(
            last_weekday_of_month(2025, 5, Weekday::Mon),
            Some(ymd(2025, 5, 26))
        );
        assert_eq!(
            last_weekday_of_month(2025, 12, Weekday::Wed),
            Some(ymd(2025, 12, 31))
        );
    }

    #[test]
    fn test_observance() {
        // 2026-07-04 is a Saturday, 2027-07-04 a Sunday
        let saturday = ymd(2026, 7, 4);
        let sunday = ymd(2027, 7, 4);

        assert_eq!(Observance::NearestWeekday.apply(saturday), Some(ymd(2026, 7, 3)));
        assert_eq!(Observance::NearestWeekday.apply(sunday), Some(ymd(2027, 7, 5)));
        assert_eq!(Observance::SundayToMonday.apply(saturday), None);
        assert_eq!(Observance::NextMonday.apply(saturday), Some(ymd(2026, 7, 6)));
        assert_eq!(Observance::Actual.apply(saturday), Some(saturday));
    }

    #[test]
    fn test_builder_and_range() {
        let cal = HolidayRules::new("Test")
            .year_range(2025, 2025)
            .fixed(1, 1, Observance::Actual)
            .dates([(2025, 6, 2)])
            .build();

        assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 1).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 6, 2).unwrap()));
        // outside the generated range
        assert!(cal.is_business_day(Date::from_ymd(2026, 1, 1).unwrap()));
        assert_eq!(cal.holidays_in_year(2025).len(), 2);
        assert_eq!(cal.holiday_count(), 2);
    }

    #[test]
    fn test_from_dates() {
        let dates = vec![
            Date::from_ymd(2025, 4, 25).unwrap(),
            Date::from_ymd(2025, 1, 27).unwrap(),
        ];
        let cal = HolidaySetCalendar::from_dates("AUSY", WeekendType::SaturdaySunday, dates);

        assert_eq!(cal.weekend(), WeekendType::SaturdaySunday);
        assert_eq!(
            cal.holidays_in_year(2025),
            vec![
                Date::from_ymd(2025, 1, 27).unwrap(),
                Date::from_ymd(2025, 4, 25).unwrap(),
            ]
        );
        assert!(!cal.is_business_day(Date::from_ymd(2025, 4, 25).unwrap()));
    }
}

//! Business day calendars.
//!
//! This module provides:
//! - The [`Calendar`] trait with business-day test and stepping primitives
//! - A rules builder for holiday sets ([`HolidayRules`])
//! - Market calendars (London, TARGET, New York, US government securities, Zurich, Tokyo)
//! - [`HolidayCalendar`], a named handle resolved through a process-wide registry

use chrono::Weekday;

mod holiday_calendar;
mod markets;
mod rules;

pub use holiday_calendar::{HolidayCalendar, HolidayCalendarId, HolidayCalendarProvider};
pub use rules::{
    easter_sunday, last_weekday_of_month, nth_weekday_of_month, HolidayRules, HolidaySetCalendar,
    Observance, MAX_YEAR, MIN_YEAR,
};

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days for a market.
/// All stepping operations are deterministic functions of the calendar's
/// fixed holiday set.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Returns the date itself if it is a business day, otherwise the
    /// next business day.
    ///
    /// Stops at [`Date::MAX`] if no business day follows.
    fn next_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            match result.checked_add_days(1) {
                Some(next) => result = next,
                None => break,
            }
        }
        result
    }

    /// Returns the date itself if it is a business day, otherwise the
    /// previous business day.
    ///
    /// Stops at [`Date::MIN`] if no business day precedes.
    fn previous_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            match result.checked_add_days(-1) {
                Some(previous) => result = previous,
                None => break,
            }
        }
        result
    }

    /// Moves by `days` business days, forward for positive values and
    /// backward for negative ones. Zero returns the input unchanged.
    ///
    /// Each step skips non-business days entirely. Saturates at
    /// [`Date::MIN`] and [`Date::MAX`].
    fn shift(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.unsigned_abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            match result.checked_add_days(direction) {
                Some(next) => result = next,
                None => break,
            }
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Counts business days between two dates (exclusive of start, inclusive of end).
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut current = start.checked_add_days(1);

        while let Some(date) = current.filter(|d| *d <= end) {
            if self.is_business_day(date) {
                count += 1;
            }
            current = date.checked_add_days(1);
        }

        count
    }
}

/// Weekend days observed by a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekendType {
    /// Saturday and Sunday (most markets)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday
    FridaySaturday,
    /// Sunday only
    SundayOnly,
    /// No weekend days
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendType::SundayOnly => weekday == Weekday::Sun,
            WeekendType::None => false,
        }
    }
}

impl std::str::FromStr for WeekendType {
    type Err = crate::error::RateRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sat/sun" | "saturday-sunday" | "satsun" => Ok(WeekendType::SaturdaySunday),
            "fri/sat" | "friday-saturday" | "frisat" => Ok(WeekendType::FridaySaturday),
            "sun" | "sunday" => Ok(WeekendType::SundayOnly),
            "none" => Ok(WeekendType::None),
            _ => Err(crate::error::RateRefError::parse("weekend", s)),
        }
    }
}

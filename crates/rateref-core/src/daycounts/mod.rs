//! Day count conventions attached to rate indices.
//!
//! - [`Act360`]: Actual/360, USD/EUR/CHF overnight rates
//! - [`Act365Fixed`]: Actual/365 Fixed, GBP/JPY/AUD overnight rates
//! - [`ActActIsda`]: Actual/Actual ISDA
//!
//! ```rust
//! use rateref_core::daycounts::DayCountConvention;
//! use rateref_core::types::Date;
//!
//! let dc: DayCountConvention = "ACT/360".parse().unwrap();
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//! assert_eq!(dc.day_count(start, end), 90);
//! ```

mod act360;
mod act365;
mod actact;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RateRefError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Market name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Year fraction between two dates. Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Runtime selection of a day count convention.
///
/// This is the value stored on an index. It serializes as its market name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// Actual/Actual ISDA
    ActActIsda,
}

impl DayCountConvention {
    /// Returns the implementation behind this convention.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::ActActIsda => &ActActIsda,
        }
    }

    /// Market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Year fraction between two dates.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        self.to_day_count().year_fraction(start, end)
    }

    /// Day count between two dates.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        self.to_day_count().day_count(start, end)
    }

    /// All supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
        ]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = RateRefError;

    /// Accepts market names ("ACT/360") and common aliases ("ACTUAL/365").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/365F" | "ACT/365 FIXED" | "ACT/365" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365FIXED" => Ok(DayCountConvention::Act365Fixed),
            "ACT/ACT ISDA" | "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA" | "ACTACTISDA" => {
                Ok(DayCountConvention::ActActIsda)
            }
            _ => Err(RateRefError::parse("day count", s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = RateRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(dc: DayCountConvention) -> Self {
        dc.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "actual/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            "ACT/365F".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert_eq!(
            "ACT/ACT".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActActIsda
        );
        assert!("30/360".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for dc in DayCountConvention::all() {
            assert_eq!(dc.name().parse::<DayCountConvention>().unwrap(), *dc);
        }
    }

    #[test]
    fn test_delegation() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(DayCountConvention::Act365Fixed.year_fraction(start, end), dec!(1));
        assert_eq!(DayCountConvention::Act360.day_count(start, end), 365);
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&DayCountConvention::Act365Fixed).unwrap();
        assert_eq!(json, "\"ACT/365F\"");
        let back: DayCountConvention = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DayCountConvention::Act365Fixed);
    }
}

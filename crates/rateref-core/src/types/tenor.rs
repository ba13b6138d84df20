//! Tenor of a reference rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RateRefError;

/// Unit of a tenor period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TenorUnit {
    /// Days
    Day,
    /// Weeks
    Week,
    /// Months
    Month,
    /// Years
    Year,
}

impl TenorUnit {
    fn suffix(self) -> char {
        match self {
            TenorUnit::Day => 'D',
            TenorUnit::Week => 'W',
            TenorUnit::Month => 'M',
            TenorUnit::Year => 'Y',
        }
    }

    fn from_suffix(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(TenorUnit::Day),
            'W' => Some(TenorUnit::Week),
            'M' => Some(TenorUnit::Month),
            'Y' => Some(TenorUnit::Year),
            _ => None,
        }
    }
}

/// Deposit period of a rate index, such as `1D` for overnight or `3M`.
///
/// Serializes as its textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor {
    count: u32,
    unit: TenorUnit,
}

impl Tenor {
    /// Overnight tenor.
    pub const TENOR_1D: Tenor = Tenor::new(1, TenorUnit::Day);
    /// One week.
    pub const TENOR_1W: Tenor = Tenor::new(1, TenorUnit::Week);
    /// One month.
    pub const TENOR_1M: Tenor = Tenor::new(1, TenorUnit::Month);
    /// Three months.
    pub const TENOR_3M: Tenor = Tenor::new(3, TenorUnit::Month);
    /// Six months.
    pub const TENOR_6M: Tenor = Tenor::new(6, TenorUnit::Month);
    /// One year.
    pub const TENOR_1Y: Tenor = Tenor::new(1, TenorUnit::Year);

    /// Creates a tenor from a count and unit.
    #[must_use]
    pub const fn new(count: u32, unit: TenorUnit) -> Self {
        Self { count, unit }
    }

    /// Number of units.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The period unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// True for a one-day tenor.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        *self == Self::TENOR_1D
    }

    /// Approximate length in years, for display and sorting.
    #[must_use]
    pub fn years(&self) -> f64 {
        let count = f64::from(self.count);
        match self.unit {
            TenorUnit::Day => count / 365.0,
            TenorUnit::Week => count * 7.0 / 365.0,
            TenorUnit::Month => count / 12.0,
            TenorUnit::Year => count,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}

impl FromStr for Tenor {
    type Err = RateRefError;

    /// Parses `1D`, `2W`, `3M`, `1Y`; `ON` and `O/N` are read as `1D`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_uppercase();
        if text == "ON" || text == "O/N" {
            return Ok(Tenor::TENOR_1D);
        }

        let err = || RateRefError::parse("tenor", s);
        let unit = text
            .chars()
            .last()
            .and_then(TenorUnit::from_suffix)
            .ok_or_else(err)?;
        let count: u32 = text[..text.len() - 1].parse().map_err(|_| err())?;
        if count == 0 {
            return Err(err());
        }
        Ok(Tenor::new(count, unit))
    }
}

impl TryFrom<String> for Tenor {
    type Error = RateRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}

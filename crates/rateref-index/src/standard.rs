//! Market-standard overnight indices.
//!
//! | Name | Currency | Day count | Calendar | Publication | Effective |
//! |------|----------|-----------|----------|-------------|-----------|
//! | `GBP-SONIA` | GBP | ACT/365F | GBLO | 0 | 0 |
//! | `EUR-EONIA` | EUR | ACT/360 | EUTA | 0 | 0 |
//! | `EUR-ESTR` | EUR | ACT/360 | EUTA | 1 | 0 |
//! | `USD-FED-FUND` | USD | ACT/360 | USNY | 1 | 0 |
//! | `USD-SOFR` | USD | ACT/360 | USGS | 1 | 0 |
//! | `CHF-TOIS` | CHF | ACT/360 | CHZU | 0 | 1 |
//! | `CHF-SARON` | CHF | ACT/360 | CHZU | 0 | 0 |
//! | `JPY-TONAR` | JPY | ACT/365F | JPTO | 1 | 0 |

use rateref_core::calendars::HolidayCalendar;
use rateref_core::daycounts::DayCountConvention;
use rateref_core::named::NamedProvider;
use rateref_core::{Currency, RateRefResult};

use crate::overnight::OvernightIndex;

/// Sterling Overnight Index Average.
pub const GBP_SONIA: &str = "GBP-SONIA";
/// Euro Overnight Index Average.
pub const EUR_EONIA: &str = "EUR-EONIA";
/// Euro Short-Term Rate.
pub const EUR_ESTR: &str = "EUR-ESTR";
/// US Federal Funds effective rate.
pub const USD_FED_FUND: &str = "USD-FED-FUND";
/// Secured Overnight Financing Rate.
pub const USD_SOFR: &str = "USD-SOFR";
/// Swiss tomorrow/next index.
pub const CHF_TOIS: &str = "CHF-TOIS";
/// Swiss Average Rate Overnight.
pub const CHF_SARON: &str = "CHF-SARON";
/// Tokyo Overnight Average Rate.
pub const JPY_TONAR: &str = "JPY-TONAR";

struct Convention {
    name: &'static str,
    alias: &'static str,
    currency: Currency,
    day_count: DayCountConvention,
    calendar: &'static str,
    publication_offset: u32,
    effective_offset: u32,
}

const CONVENTIONS: &[Convention] = &[
    Convention {
        name: GBP_SONIA,
        alias: "SONIA",
        currency: Currency::GBP,
        day_count: DayCountConvention::Act365Fixed,
        calendar: "GBLO",
        publication_offset: 0,
        effective_offset: 0,
    },
    Convention {
        name: EUR_EONIA,
        alias: "EONIA",
        currency: Currency::EUR,
        day_count: DayCountConvention::Act360,
        calendar: "EUTA",
        publication_offset: 0,
        effective_offset: 0,
    },
    Convention {
        name: EUR_ESTR,
        alias: "ESTR",
        currency: Currency::EUR,
        day_count: DayCountConvention::Act360,
        calendar: "EUTA",
        publication_offset: 1,
        effective_offset: 0,
    },
    Convention {
        name: USD_FED_FUND,
        alias: "FEDFUND",
        currency: Currency::USD,
        day_count: DayCountConvention::Act360,
        calendar: "USNY",
        publication_offset: 1,
        effective_offset: 0,
    },
    Convention {
        name: USD_SOFR,
        alias: "SOFR",
        currency: Currency::USD,
        day_count: DayCountConvention::Act360,
        calendar: "USGS",
        publication_offset: 1,
        effective_offset: 0,
    },
    Convention {
        name: CHF_TOIS,
        alias: "TOIS",
        currency: Currency::CHF,
        day_count: DayCountConvention::Act360,
        calendar: "CHZU",
        publication_offset: 0,
        effective_offset: 1,
    },
    Convention {
        name: CHF_SARON,
        alias: "SARON",
        currency: Currency::CHF,
        day_count: DayCountConvention::Act360,
        calendar: "CHZU",
        publication_offset: 0,
        effective_offset: 0,
    },
    Convention {
        name: JPY_TONAR,
        alias: "TONAR",
        currency: Currency::JPY,
        day_count: DayCountConvention::Act365Fixed,
        calendar: "JPTO",
        publication_offset: 1,
        effective_offset: 0,
    },
];

/// Provider of the market-standard overnight indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardOvernightIndices;

impl NamedProvider<OvernightIndex> for StandardOvernightIndices {
    fn provider_name(&self) -> &str {
        "standard-overnight-indices"
    }

    fn entries(&self) -> RateRefResult<Vec<OvernightIndex>> {
        CONVENTIONS
            .iter()
            .map(|c| {
                OvernightIndex::builder(c.name)
                    .currency(c.currency)
                    .day_count(c.day_count)
                    .fixing_calendar(HolidayCalendar::of(c.calendar)?)
                    .publication_offset(c.publication_offset)
                    .effective_offset(c.effective_offset)
                    .build()
            })
            .collect()
    }

    fn alternate_names(&self) -> Vec<(String, String)> {
        CONVENTIONS
            .iter()
            .map(|c| (c.alias.to_string(), c.name.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::RateIndex;

    #[test]
    fn test_entries_build() {
        let entries = StandardOvernightIndices.entries().unwrap();
        assert_eq!(entries.len(), CONVENTIONS.len());

        let sonia = entries.iter().find(|i| i.name() == GBP_SONIA).unwrap();
        assert_eq!(sonia.currency(), Currency::GBP);
        assert_eq!(sonia.day_count(), DayCountConvention::Act365Fixed);
        assert_eq!(sonia.fixing_calendar().name(), "GBLO");
    }

    #[test]
    fn test_alternate_names_target_entries() {
        let names: Vec<String> = StandardOvernightIndices
            .entries()
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        for (alias, canonical) in StandardOvernightIndices.alternate_names() {
            assert!(names.contains(&canonical), "{alias} -> {canonical}");
        }
    }

    #[test]
    fn test_tonar_publishes_after_golden_week() {
        let entries = StandardOvernightIndices.entries().unwrap();
        let tonar = entries.iter().find(|i| i.name() == JPY_TONAR).unwrap();
        assert_eq!(tonar.currency(), Currency::JPY);
        assert_eq!(tonar.fixing_calendar().name(), "JPTO");

        // Friday 2025-05-02, then Saturday to Tuesday are closed
        let fixing = rateref_core::Date::from_ymd(2025, 5, 2).unwrap();
        let wednesday = rateref_core::Date::from_ymd(2025, 5, 7).unwrap();
        assert_eq!(tonar.publication_from_fixing(fixing), wednesday);
        assert_eq!(tonar.effective_from_fixing(fixing), fixing);
        assert_eq!(tonar.maturity_from_effective(fixing), wednesday);
    }
}

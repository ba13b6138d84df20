//! Overnight rate indices and their date calculations.
//!
//! An overnight index relates four dates:
//!
//! | Date | Meaning |
//! |------|---------|
//! | fixing | the day the rate is observed |
//! | publication | the day the rate is published, `publication_offset` business days after fixing |
//! | effective | the start of the implied deposit, `effective_offset` business days after fixing |
//! | maturity | the end of the implied deposit, one business day after effective |
//!
//! Every calculation first rolls its input forward to a business day of the
//! fixing calendar, so all of them are total over calendar dates.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use rateref_core::calendars::{Calendar, HolidayCalendar};
use rateref_core::daycounts::DayCountConvention;
use rateref_core::named::Named;
use rateref_core::{Currency, Date, RateRefError, RateRefResult, StandardId, Tenor};

use crate::index::{Index, RateIndex, INDEX_SCHEME};

/// Largest publication or effective offset, in business days.
pub const MAX_DATE_OFFSET: u32 = 365;

/// An overnight rate index such as SONIA, SOFR or €STR.
///
/// Values are immutable. Two indices are equal when every field is equal,
/// including the identity of the fixing calendar.
///
/// # Example
///
/// ```rust
/// use rateref_core::Date;
/// use rateref_index::OvernightIndex;
///
/// let sofr = OvernightIndex::of("USD-SOFR").unwrap();
/// // Thursday 2025-07-03: published the following Monday, after Independence Day
/// let fixing = Date::from_ymd(2025, 7, 3).unwrap();
/// assert_eq!(sofr.publication_from_fixing(fixing), Date::from_ymd(2025, 7, 7).unwrap());
/// assert_eq!(sofr.effective_from_fixing(fixing), fixing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OvernightIndex {
    name: String,
    standard_id: StandardId,
    currency: Currency,
    day_count: DayCountConvention,
    fixing_calendar: HolidayCalendar,
    tenor: Tenor,
    publication_offset: u32,
    effective_offset: u32,
}

impl OvernightIndex {
    /// Starts building an index with the given name.
    pub fn builder(name: impl Into<String>) -> OvernightIndexBuilder {
        OvernightIndexBuilder::new(name)
    }

    /// The unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Business days from fixing to publication, usually 0 or 1.
    pub fn publication_offset(&self) -> u32 {
        self.publication_offset
    }

    /// Business days from fixing to effective, usually 0 or 1.
    pub fn effective_offset(&self) -> u32 {
        self.effective_offset
    }

    /// Rolls a date forward to the next valid fixing date, unchanged if it
    /// already is one.
    pub fn normalize_fixing_date(&self, date: Date) -> Date {
        self.fixing_calendar.next_or_same(date)
    }

    /// Publication date for a fixing date.
    pub fn publication_from_fixing(&self, fixing_date: Date) -> Date {
        let fixing = self.normalize_fixing_date(fixing_date);
        self.fixing_calendar.shift(fixing, steps(self.publication_offset))
    }

    /// Effective date for a fixing date.
    pub fn effective_from_fixing(&self, fixing_date: Date) -> Date {
        let fixing = self.normalize_fixing_date(fixing_date);
        self.fixing_calendar.shift(fixing, steps(self.effective_offset))
    }

    /// Fixing date for an effective date.
    ///
    /// Inverse of [`effective_from_fixing`](Self::effective_from_fixing) on
    /// valid fixing dates.
    pub fn fixing_from_effective(&self, effective_date: Date) -> Date {
        let effective = self.normalize_fixing_date(effective_date);
        self.fixing_calendar.shift(effective, -steps(self.effective_offset))
    }

    /// Maturity date for an effective date, always one business day later.
    pub fn maturity_from_effective(&self, effective_date: Date) -> Date {
        let effective = self.normalize_fixing_date(effective_date);
        self.fixing_calendar.shift(effective, 1)
    }

    /// All four dates derived from a fixing date.
    pub fn date_chain(&self, fixing_date: Date) -> IndexDates {
        let fixing = self.normalize_fixing_date(fixing_date);
        let effective = self.effective_from_fixing(fixing);
        IndexDates {
            fixing,
            publication: self.publication_from_fixing(fixing),
            effective,
            maturity: self.maturity_from_effective(effective),
        }
    }

    /// All four dates derived from an effective date.
    pub fn date_chain_from_effective(&self, effective_date: Date) -> IndexDates {
        self.date_chain(self.fixing_from_effective(effective_date))
    }
}

fn steps(offset: u32) -> i32 {
    i32::try_from(offset).unwrap_or(i32::MAX)
}

impl Index for OvernightIndex {
    fn name(&self) -> &str {
        &self.name
    }

    fn standard_id(&self) -> &StandardId {
        &self.standard_id
    }
}

impl RateIndex for OvernightIndex {
    fn currency(&self) -> Currency {
        self.currency
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn fixing_calendar(&self) -> &HolidayCalendar {
        &self.fixing_calendar
    }

    fn tenor(&self) -> Tenor {
        self.tenor
    }
}

impl Named for OvernightIndex {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for OvernightIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for OvernightIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for OvernightIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        OvernightIndex::of(&name)
            .cloned()
            .map_err(serde::de::Error::custom)
    }
}

/// The dates of one overnight deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexDates {
    /// Observation date.
    pub fixing: Date,
    /// Publication date.
    pub publication: Date,
    /// Deposit start.
    pub effective: Date,
    /// Deposit end.
    pub maturity: Date,
}

/// Builder for [`OvernightIndex`].
#[derive(Debug, Clone)]
pub struct OvernightIndexBuilder {
    name: String,
    currency: Option<Currency>,
    day_count: Option<DayCountConvention>,
    fixing_calendar: Option<HolidayCalendar>,
    tenor: Tenor,
    publication_offset: u32,
    effective_offset: u32,
}

impl OvernightIndexBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: None,
            day_count: None,
            fixing_calendar: None,
            tenor: Tenor::TENOR_1D,
            publication_offset: 0,
            effective_offset: 0,
        }
    }

    /// Sets the currency.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the day count.
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Sets the fixing calendar.
    pub fn fixing_calendar(mut self, calendar: HolidayCalendar) -> Self {
        self.fixing_calendar = Some(calendar);
        self
    }

    /// Sets the tenor. Defaults to `1D`.
    pub fn tenor(mut self, tenor: Tenor) -> Self {
        self.tenor = tenor;
        self
    }

    /// Sets the publication offset in business days. Defaults to 0.
    pub fn publication_offset(mut self, days: u32) -> Self {
        self.publication_offset = days;
        self
    }

    /// Sets the effective offset in business days. Defaults to 0.
    pub fn effective_offset(mut self, days: u32) -> Self {
        self.effective_offset = days;
        self
    }

    /// Builds the index.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the name is empty, a required field is unset or
    /// an offset exceeds [`MAX_DATE_OFFSET`].
    pub fn build(self) -> RateRefResult<OvernightIndex> {
        let standard_id = StandardId::of(INDEX_SCHEME, self.name.as_str())?;
        check_offset("publication_offset", self.publication_offset)?;
        check_offset("effective_offset", self.effective_offset)?;
        let currency = self.currency.ok_or_else(|| missing("currency"))?;
        let day_count = self.day_count.ok_or_else(|| missing("day_count"))?;
        let fixing_calendar = self
            .fixing_calendar
            .ok_or_else(|| missing("fixing_calendar"))?;

        Ok(OvernightIndex {
            name: self.name,
            standard_id,
            currency,
            day_count,
            fixing_calendar,
            tenor: self.tenor,
            publication_offset: self.publication_offset,
            effective_offset: self.effective_offset,
        })
    }
}

fn missing(field: &str) -> RateRefError {
    RateRefError::invalid_argument(field, "must be set")
}

fn check_offset(field: &str, days: u32) -> RateRefResult<()> {
    if days > MAX_DATE_OFFSET {
        return Err(RateRefError::invalid_argument(
            field,
            format!("{days} exceeds the maximum of {MAX_DATE_OFFSET} business days"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn index(calendar: &str, publication: u32, effective: u32) -> OvernightIndex {
        OvernightIndex::builder("TEST-ON")
            .currency(Currency::USD)
            .day_count(DayCountConvention::Act360)
            .fixing_calendar(HolidayCalendar::of(calendar).unwrap())
            .publication_offset(publication)
            .effective_offset(effective)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let idx = index("USNY", 1, 0);
        assert_eq!(idx.tenor(), Tenor::TENOR_1D);
        assert_eq!(idx.standard_id().to_string(), "OG-Index~TEST-ON");
        assert_eq!(idx.to_string(), "TEST-ON");
    }

    #[test]
    fn test_builder_requires_fields() {
        let err = OvernightIndex::builder("X")
            .currency(Currency::EUR)
            .build()
            .unwrap_err();
        assert!(matches!(err, RateRefError::InvalidArgument { .. }));

        let err = OvernightIndex::builder("")
            .currency(Currency::EUR)
            .day_count(DayCountConvention::Act360)
            .fixing_calendar(HolidayCalendar::of("EUTA").unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, RateRefError::InvalidArgument { .. }));
    }

    #[test]
    fn test_normalize_forward_snaps() {
        let idx = index("Sat/Sun", 0, 0);
        let saturday = d(2025, 1, 4);
        let monday = d(2025, 1, 6);

        assert_eq!(idx.normalize_fixing_date(saturday), monday);
        assert_eq!(idx.normalize_fixing_date(monday), monday);
    }

    #[test]
    fn test_zero_offsets_are_identity_after_normalization() {
        let idx = index("Sat/Sun", 0, 0);
        let sunday = d(2025, 1, 5);
        let monday = d(2025, 1, 6);

        assert_eq!(idx.publication_from_fixing(sunday), monday);
        assert_eq!(idx.effective_from_fixing(sunday), monday);
        assert_eq!(idx.fixing_from_effective(sunday), monday);
    }

    #[test]
    fn test_offsets_skip_holidays() {
        // Thursday before Good Friday 2025, London
        let idx = index("GBLO", 1, 1);
        let thursday = d(2025, 4, 17);
        let tuesday = d(2025, 4, 22);

        assert_eq!(idx.publication_from_fixing(thursday), tuesday);
        assert_eq!(idx.effective_from_fixing(thursday), tuesday);
        assert_eq!(idx.fixing_from_effective(tuesday), thursday);
        assert_eq!(idx.maturity_from_effective(thursday), tuesday);
    }

    #[test]
    fn test_maturity_on_holiday_input() {
        let idx = index("GBLO", 0, 0);
        // Christmas Day 2025 snaps to Monday 29th, maturity Tuesday 30th
        assert_eq!(idx.maturity_from_effective(d(2025, 12, 25)), d(2025, 12, 30));
    }

    #[test]
    fn test_date_chain() {
        let idx = index("CHZU", 0, 1);
        let chain = idx.date_chain(d(2025, 7, 31));

        assert_eq!(chain.fixing, d(2025, 7, 31));
        assert_eq!(chain.publication, d(2025, 7, 31));
        // Swiss national day
        assert_eq!(chain.effective, d(2025, 8, 4));
        assert_eq!(chain.maturity, d(2025, 8, 5));

        assert_eq!(idx.date_chain_from_effective(d(2025, 8, 4)), chain);
    }

    #[test]
    fn test_date_chain_serializes() {
        let idx = index("Sat/Sun", 1, 0);
        let chain = idx.date_chain(d(2025, 1, 3));
        let json = serde_json::to_value(chain).unwrap();
        assert_eq!(json["publication"], "2025-01-06");
    }

    #[test]
    fn test_builder_rejects_large_offsets() {
        let builder = OvernightIndex::builder("TEST-ON")
            .currency(Currency::USD)
            .day_count(DayCountConvention::Act360)
            .fixing_calendar(HolidayCalendar::of("USNY").unwrap());

        let err = builder
            .clone()
            .publication_offset(u32::MAX)
            .build()
            .unwrap_err();
        assert!(matches!(err, RateRefError::InvalidArgument { .. }));
        let err = builder
            .clone()
            .effective_offset(MAX_DATE_OFFSET + 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, RateRefError::InvalidArgument { .. }));

        let idx = builder.publication_offset(MAX_DATE_OFFSET).build().unwrap();
        assert_eq!(idx.publication_offset(), MAX_DATE_OFFSET);
    }

    #[test]
    fn test_dates_saturate_at_range_limits() {
        let idx = index("GBLO", 1, 1);

        assert_eq!(idx.normalize_fixing_date(Date::MAX), Date::MAX);
        assert_eq!(idx.maturity_from_effective(Date::MAX), Date::MAX);
        assert_eq!(idx.publication_from_fixing(Date::MAX), Date::MAX);
        assert_eq!(idx.fixing_from_effective(Date::MIN), Date::MIN);

        let chain = idx.date_chain(Date::MAX);
        assert_eq!(chain.fixing, Date::MAX);
        assert_eq!(chain.maturity, Date::MAX);
    }
}

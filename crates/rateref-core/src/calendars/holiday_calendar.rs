//! Named holiday calendars.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{markets, Calendar};
use crate::error::{require_name, RateRefError, RateRefResult};
use crate::named::{Named, NamedProvider, NamedRegistry};
use crate::types::Date;

/// Identifier of a holiday calendar, such as `GBLO` or `USNY`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolidayCalendarId(String);

impl HolidayCalendarId {
    /// Creates an identifier, rejecting empty names.
    pub fn of(name: impl Into<String>) -> RateRefResult<Self> {
        let name = name.into();
        require_name("calendar id", &name)?;
        Ok(Self(name))
    }

    /// The identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HolidayCalendarId {
    type Err = RateRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s.trim())
    }
}

static REGISTRY: OnceLock<NamedRegistry<HolidayCalendar>> = OnceLock::new();

/// A holiday calendar identified by name.
///
/// Cloning is cheap: the holiday data is shared. Two handles are equal
/// when they carry the same id and the same underlying calendar.
#[derive(Clone)]
pub struct HolidayCalendar {
    id: HolidayCalendarId,
    inner: Arc<dyn Calendar>,
}

impl HolidayCalendar {
    /// Wraps a calendar under the given id.
    pub fn new(id: impl Into<String>, calendar: impl Calendar + 'static) -> RateRefResult<Self> {
        Ok(Self {
            id: HolidayCalendarId::of(id)?,
            inner: Arc::new(calendar),
        })
    }

    /// Looks up a calendar by id in the global registry.
    pub fn of(id: &str) -> RateRefResult<Self> {
        Self::registry().lookup(id).cloned()
    }

    /// The global calendar registry, holding the built-in market calendars
    /// and any registered provider.
    pub fn registry() -> &'static NamedRegistry<HolidayCalendar> {
        REGISTRY.get_or_init(|| {
            NamedRegistry::new("HolidayCalendar").with_provider(HolidayCalendarProvider)
        })
    }

    /// Adds a calendar provider to the global registry.
    ///
    /// Must be called before the first lookup.
    pub fn register_provider(
        provider: impl NamedProvider<HolidayCalendar> + 'static,
    ) -> RateRefResult<()> {
        Self::registry().register(provider)
    }

    /// The calendar id.
    pub fn id(&self) -> &HolidayCalendarId {
        &self.id
    }

    /// The calendar id as a string.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }
}

impl Named for HolidayCalendar {
    fn name(&self) -> &str {
        self.id.as_str()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        self.id.as_str()
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.inner.is_business_day(date)
    }

    fn next_or_same(&self, date: Date) -> Date {
        self.inner.next_or_same(date)
    }

    fn previous_or_same(&self, date: Date) -> Date {
        self.inner.previous_or_same(date)
    }

    fn shift(&self, date: Date, days: i32) -> Date {
        self.inner.shift(date, days)
    }
}

impl PartialEq for HolidayCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for HolidayCalendar {}

impl Hash for HolidayCalendar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HolidayCalendar").field(&self.id.0).finish()
    }
}

impl fmt::Display for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

impl Serialize for HolidayCalendar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id.as_str())
    }
}

impl<'de> Deserialize<'de> for HolidayCalendar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Self::of(&id).map_err(serde::de::Error::custom)
    }
}

/// Provider of the built-in market calendars.
#[derive(Debug, Clone, Copy, Default)]
pub struct HolidayCalendarProvider;

impl NamedProvider<HolidayCalendar> for HolidayCalendarProvider {
    fn provider_name(&self) -> &str {
        "builtin-calendars"
    }

    fn entries(&self) -> RateRefResult<Vec<HolidayCalendar>> {
        markets::builtin()
            .into_iter()
            .map(|calendar| {
                let id = calendar.name().to_string();
                HolidayCalendar::new(id, calendar)
            })
            .collect()
    }

    fn alternate_names(&self) -> Vec<(String, String)> {
        vec![("TARGET".to_string(), "EUTA".to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{HolidaySetCalendar, WeekendType};

    #[test]
    fn test_builtin_lookup() {
        let gblo = HolidayCalendar::of("GBLO").unwrap();
        assert_eq!(gblo.id().as_str(), "GBLO");
        assert_eq!(gblo.to_string(), "GBLO");
        assert!(!gblo.is_business_day(Date::from_ymd(2025, 12, 25).unwrap()));

        let target = HolidayCalendar::of("TARGET").unwrap();
        assert_eq!(target, HolidayCalendar::of("EUTA").unwrap());

        assert!(HolidayCalendar::of("XXXX").unwrap_err().is_not_found());
        assert!(HolidayCalendar::of("").is_err());
    }

    #[test]
    fn test_all_builtin_ids() {
        let names = HolidayCalendar::registry().all_names().unwrap();
        for id in ["GBLO", "EUTA", "USNY", "USGS", "CHZU", "JPTO", "NoHolidays", "Sat/Sun"] {
            assert!(names.contains(id), "missing {id}");
        }
    }

    #[test]
    fn test_equality_requires_same_data() {
        let a = HolidayCalendar::new(
            "LOCAL",
            HolidaySetCalendar::from_dates("LOCAL", WeekendType::SaturdaySunday, Vec::new()),
        )
        .unwrap();
        let b = HolidayCalendar::new(
            "LOCAL",
            HolidaySetCalendar::from_dates("LOCAL", WeekendType::SaturdaySunday, Vec::new()),
        )
        .unwrap();

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_as_id() {
        let usny = HolidayCalendar::of("USNY").unwrap();
        let json = serde_json::to_string(&usny).unwrap();
        assert_eq!(json, "\"USNY\"");

        let back: HolidayCalendar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, usny);
        assert!(serde_json::from_str::<HolidayCalendar>("\"NOPE\"").is_err());
    }

    #[test]
    fn test_calendar_id_parse() {
        assert_eq!("CHZU".parse::<HolidayCalendarId>().unwrap().as_str(), "CHZU");
        assert!("  ".parse::<HolidayCalendarId>().is_err());
    }
}

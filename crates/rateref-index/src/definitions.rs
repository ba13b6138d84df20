//! Index definitions loaded from TOML files.
//!
//! A definition file holds an optional `[defaults]` table, any number of
//! `[calendar."<ID>"]` tables and one `[index."<NAME>"]` table per index.
//! Each table is read as a [`PropertySet`]; an index section is layered over
//! the defaults, the section winning key by key.
//!
//! ```toml
//! [defaults]
//! tenor = "1D"
//! publication_offset = 0
//!
//! [calendar."XTST"]
//! weekend = "Sat/Sun"
//! holidays = ["2025-01-01", "2025-12-25"]
//!
//! [index."GBP-TEST-ON"]
//! currency = "GBP"
//! day_count = "ACT/365F"
//! calendar = "GBLO"
//! alternate_names = ["TESTON"]
//! ```
//!
//! Recognized index keys: `currency`, `day_count`, `calendar` (required),
//! `tenor`, `publication_offset`, `effective_offset`, `alternate_names`.

use std::collections::BTreeMap;
use std::path::Path;

use rateref_core::calendars::{HolidayCalendar, HolidaySetCalendar, WeekendType};
use rateref_core::daycounts::DayCountConvention;
use rateref_core::named::{ListProvider, NamedProvider, NamedRegistry};
use rateref_core::properties::PropertySet;
use rateref_core::{Currency, Date, RateRefError, RateRefResult, Tenor};

use crate::error::{IndexError, IndexResult};
use crate::overnight::{OvernightIndex, MAX_DATE_OFFSET};

const INDEX_KEYS: &[&str] = &[
    "currency",
    "day_count",
    "calendar",
    "tenor",
    "publication_offset",
    "effective_offset",
    "alternate_names",
];

const CALENDAR_KEYS: &[&str] = &["weekend", "holidays"];

/// A validated index definition whose calendar is still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexDefinition {
    name: String,
    currency: Currency,
    day_count: DayCountConvention,
    calendar: String,
    tenor: Tenor,
    publication_offset: u32,
    effective_offset: u32,
    alternate_names: Vec<String>,
}

/// The contents of one definition file.
#[derive(Debug, Clone)]
pub struct IndexDefinitions {
    source: String,
    calendars: Vec<HolidayCalendar>,
    indices: Vec<IndexDefinition>,
}

impl IndexDefinitions {
    /// Reads and validates a definition file.
    pub fn load(path: impl AsRef<Path>) -> IndexResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path.display().to_string(), &text)
    }

    /// Parses definition text. `source` names the text in errors and logs.
    pub fn parse(source: impl Into<String>, text: &str) -> IndexResult<Self> {
        let source = source.into();
        let table: toml::Table = toml::from_str(text)?;

        let mut defaults = PropertySet::EMPTY;
        let mut calendar_sections = BTreeMap::new();
        let mut index_sections = BTreeMap::new();

        for (key, value) in &table {
            match key.as_str() {
                "defaults" => defaults = property_set(key, value)?,
                "calendar" => calendar_sections = named_sections(key, value)?,
                "index" => index_sections = named_sections(key, value)?,
                other => {
                    return Err(IndexError::definition(
                        source.as_str(),
                        format!("unknown section '{other}'"),
                    ))
                }
            }
        }

        let calendars = calendar_sections
            .iter()
            .map(|(id, props)| calendar_from_properties(id, props))
            .collect::<IndexResult<Vec<_>>>()?;

        let indices = index_sections
            .iter()
            .map(|(name, section)| index_from_properties(name, &defaults.combined_with(section)))
            .collect::<IndexResult<Vec<_>>>()?;

        tracing::info!(
            source = %source,
            indices = indices.len(),
            calendars = calendars.len(),
            "Loaded index definitions"
        );

        Ok(Self {
            source,
            calendars,
            indices,
        })
    }

    /// Where the definitions came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of the defined indices, sorted.
    pub fn index_names(&self) -> Vec<&str> {
        self.indices.iter().map(|d| d.name.as_str()).collect()
    }

    /// The calendars defined by the file.
    pub fn calendars(&self) -> &[HolidayCalendar] {
        &self.calendars
    }

    /// Converts the definitions into an index provider.
    pub fn into_provider(self) -> DefinitionFileProvider {
        DefinitionFileProvider {
            source: self.source,
            calendars: self
                .calendars
                .into_iter()
                .map(|c| (c.name().to_string(), c))
                .collect(),
            indices: self.indices,
        }
    }

    /// Registers the calendars and indices with the global registries.
    ///
    /// Must run before the first index or calendar lookup. Nothing is
    /// registered if either registry is already initialized.
    pub fn register(self) -> IndexResult<()> {
        self.register_with(HolidayCalendar::registry(), OvernightIndex::registry())
    }

    fn register_with(
        self,
        calendars: &NamedRegistry<HolidayCalendar>,
        indices: &NamedRegistry<OvernightIndex>,
    ) -> IndexResult<()> {
        let calendars_needed = !self.calendars.is_empty();
        if calendars_needed && calendars.is_initialized() {
            return Err(already_initialized(calendars.kind(), &self.source));
        }
        if indices.is_initialized() {
            return Err(already_initialized(indices.kind(), &self.source));
        }

        if calendars_needed {
            calendars.register(ListProvider::new(self.source.clone(), self.calendars.clone()))?;
        }
        indices.register(self.into_provider())?;
        Ok(())
    }
}

/// Index provider backed by a definition file.
///
/// Calendars defined in the same file take precedence over the global
/// calendar registry.
#[derive(Debug, Clone)]
pub struct DefinitionFileProvider {
    source: String,
    calendars: BTreeMap<String, HolidayCalendar>,
    indices: Vec<IndexDefinition>,
}

impl DefinitionFileProvider {
    fn resolve_calendar(&self, id: &str) -> RateRefResult<HolidayCalendar> {
        match self.calendars.get(id) {
            Some(calendar) => Ok(calendar.clone()),
            None => HolidayCalendar::of(id),
        }
    }
}

impl NamedProvider<OvernightIndex> for DefinitionFileProvider {
    fn provider_name(&self) -> &str {
        &self.source
    }

    fn entries(&self) -> RateRefResult<Vec<OvernightIndex>> {
        self.indices
            .iter()
            .map(|d| {
                OvernightIndex::builder(d.name.as_str())
                    .currency(d.currency)
                    .day_count(d.day_count)
                    .fixing_calendar(self.resolve_calendar(&d.calendar)?)
                    .tenor(d.tenor)
                    .publication_offset(d.publication_offset)
                    .effective_offset(d.effective_offset)
                    .build()
            })
            .collect()
    }

    fn alternate_names(&self) -> Vec<(String, String)> {
        self.indices
            .iter()
            .flat_map(|d| {
                d.alternate_names
                    .iter()
                    .map(move |alias| (alias.clone(), d.name.clone()))
            })
            .collect()
    }
}

fn already_initialized(kind: &str, source: &str) -> IndexError {
    RateRefError::conflict(kind, source, "registry already initialized").into()
}

fn named_sections(
    section: &str,
    value: &toml::Value,
) -> IndexResult<BTreeMap<String, PropertySet>> {
    let toml::Value::Table(table) = value else {
        return Err(IndexError::definition(section, "expected a table"));
    };
    table
        .iter()
        .map(|(name, value)| Ok((name.clone(), property_set(name, value)?)))
        .collect()
}

/// Flattens a TOML table into properties. Arrays become multi-valued keys.
fn property_set(name: &str, value: &toml::Value) -> IndexResult<PropertySet> {
    let toml::Value::Table(table) = value else {
        return Err(IndexError::definition(name, "expected a table"));
    };
    let mut pairs = Vec::new();
    for (key, value) in table {
        match value {
            toml::Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar(name, key, item)?));
                }
            }
            other => pairs.push((key.clone(), scalar(name, key, other)?)),
        }
    }
    Ok(PropertySet::of_multimap(pairs))
}

fn scalar(name: &str, key: &str, value: &toml::Value) -> IndexResult<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(dt) => Ok(dt.to_string()),
        _ => Err(IndexError::definition(
            name,
            format!("key '{key}' must hold a scalar or a list of scalars"),
        )),
    }
}

fn check_keys(name: &str, props: &PropertySet, allowed: &[&str]) -> IndexResult<()> {
    match props.keys().into_iter().find(|k| !allowed.contains(k)) {
        Some(unknown) => Err(IndexError::definition(name, format!("unknown key '{unknown}'"))),
        None => Ok(()),
    }
}

fn required<'a>(name: &str, props: &'a PropertySet, key: &str) -> IndexResult<&'a str> {
    props.value(key).map_err(|e| match e {
        RateRefError::NotFound { .. } => {
            IndexError::definition(name, format!("missing required key '{key}'"))
        }
        other => IndexError::Core(other),
    })
}

fn parse_field<T: std::str::FromStr>(name: &str, key: &str, raw: &str) -> IndexResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| IndexError::definition(name, format!("invalid {key} '{raw}'")))
}

fn offset(name: &str, props: &PropertySet, key: &str) -> IndexResult<u32> {
    let days: u32 = match props.optional_value(key)? {
        Some(raw) => parse_field(name, key, raw)?,
        None => 0,
    };
    if days > MAX_DATE_OFFSET {
        return Err(IndexError::definition(
            name,
            format!("{key} {days} exceeds the maximum of {MAX_DATE_OFFSET}"),
        ));
    }
    Ok(days)
}

fn index_from_properties(name: &str, props: &PropertySet) -> IndexResult<IndexDefinition> {
    check_keys(name, props, INDEX_KEYS)?;

    let tenor = match props.optional_value("tenor")? {
        Some(raw) => parse_field(name, "tenor", raw)?,
        None => Tenor::TENOR_1D,
    };
    let publication_offset = offset(name, props, "publication_offset")?;
    let effective_offset = offset(name, props, "effective_offset")?;

    Ok(IndexDefinition {
        name: name.to_string(),
        currency: parse_field(name, "currency", required(name, props, "currency")?)?,
        day_count: parse_field(name, "day_count", required(name, props, "day_count")?)?,
        calendar: required(name, props, "calendar")?.to_string(),
        tenor,
        publication_offset,
        effective_offset,
        alternate_names: props.value_list("alternate_names").to_vec(),
    })
}

fn calendar_from_properties(id: &str, props: &PropertySet) -> IndexResult<HolidayCalendar> {
    check_keys(id, props, CALENDAR_KEYS)?;

    let weekend = match props.optional_value("weekend")? {
        Some(raw) => parse_field(id, "weekend", raw)?,
        None => WeekendType::SaturdaySunday,
    };
    let holidays = props
        .value_list("holidays")
        .iter()
        .map(|raw| {
            Date::parse(raw)
                .map_err(|_| IndexError::definition(id, format!("invalid holiday '{raw}'")))
        })
        .collect::<IndexResult<Vec<_>>>()?;

    Ok(HolidayCalendar::new(
        id,
        HolidaySetCalendar::from_dates(id, weekend, holidays),
    )?)
}

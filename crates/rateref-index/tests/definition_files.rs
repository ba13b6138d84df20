//! Registering index definitions from a file into the global registries.
//!
//! Everything runs in one test: registration must precede the first lookup
//! and the registries are shared by the whole test binary.

use rateref_index::prelude::*;

const DEFINITIONS: &str = r#"
[defaults]
currency = "AUD"
day_count = "ACT/365F"

[calendar."AUSY"]
holidays = ["2025-01-27", "2025-04-25"]

[index."AUD-AONIA"]
calendar = "AUSY"
alternate_names = ["AONIA"]
"#;

#[test]
fn file_definitions_extend_the_registries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aud.toml");
    std::fs::write(&path, DEFINITIONS).unwrap();

    IndexDefinitions::load(&path).unwrap().register().unwrap();

    let aonia = OvernightIndex::of("AONIA").unwrap();
    assert_eq!(aonia.name(), "AUD-AONIA");
    assert_eq!(aonia.currency(), Currency::AUD);
    assert_eq!(aonia.day_count(), DayCountConvention::Act365Fixed);

    // the calendar is shared with the calendar registry
    let calendar = HolidayCalendar::of("AUSY").unwrap();
    assert_eq!(aonia.fixing_calendar(), &calendar);

    // Anzac Day 2025 is a Friday
    let anzac = Date::from_ymd(2025, 4, 25).unwrap();
    assert_eq!(
        aonia.maturity_from_effective(Date::from_ymd(2025, 4, 24).unwrap()),
        Date::from_ymd(2025, 4, 28).unwrap()
    );
    assert_eq!(aonia.normalize_fixing_date(anzac), Date::from_ymd(2025, 4, 28).unwrap());

    // standard indices are still present
    assert!(OvernightIndex::of("GBP-SONIA").is_ok());

    // too late for another file
    let again = IndexDefinitions::load(&path).unwrap().register();
    assert!(again.unwrap_err().is_conflict());
}

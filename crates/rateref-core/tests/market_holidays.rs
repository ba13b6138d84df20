//! Built-in market calendars checked against published holiday lists.

use rateref_core::calendars::{Calendar, HolidayCalendar};
use rateref_core::types::Date;

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

/// Weekday holidays of a calendar in one year, in date order.
fn weekday_holidays(calendar: &HolidayCalendar, year: i32) -> Vec<String> {
    let start = Date::from_ymd(year, 1, 1).unwrap();
    let end = Date::from_ymd(year, 12, 31).unwrap();
    (0..=start.days_between(&end))
        .map(|offset| start.add_days(offset))
        .filter(|d| d.is_weekday() && !calendar.is_business_day(*d))
        .map(|d| d.to_string())
        .collect()
}

#[test]
fn test_london_2024() {
    let gblo = HolidayCalendar::of("GBLO").unwrap();
    assert_eq!(
        weekday_holidays(&gblo, 2024),
        vec![
            "2024-01-01",
            "2024-03-29",
            "2024-04-01",
            "2024-05-06",
            "2024-05-27",
            "2024-08-26",
            "2024-12-25",
            "2024-12-26",
        ]
    );
}

#[test]
fn test_target_2024() {
    let target = HolidayCalendar::of("TARGET").unwrap();
    assert_eq!(target.name(), "EUTA");
    assert_eq!(
        weekday_holidays(&target, 2024),
        vec![
            "2024-01-01",
            "2024-03-29",
            "2024-04-01",
            "2024-05-01",
            "2024-12-25",
            "2024-12-26",
        ]
    );
}

#[test]
fn test_new_york_fed_2024() {
    let usny = HolidayCalendar::of("USNY").unwrap();
    assert_eq!(
        weekday_holidays(&usny, 2024),
        vec![
            "2024-01-01",
            "2024-01-15",
            "2024-02-19",
            "2024-05-27",
            "2024-06-19",
            "2024-07-04",
            "2024-09-02",
            "2024-10-14",
            "2024-11-11",
            "2024-11-28",
            "2024-12-25",
        ]
    );
}

#[test]
fn test_us_government_securities_adds_good_friday() {
    let usgs = HolidayCalendar::of("USGS").unwrap();
    let usny = HolidayCalendar::of("USNY").unwrap();

    let good_friday = date("2024-03-29");
    assert!(!usgs.is_business_day(good_friday));
    assert!(usny.is_business_day(good_friday));
    assert_eq!(weekday_holidays(&usgs, 2024).len(), 12);
}

#[test]
fn test_zurich_2024() {
    let chzu = HolidayCalendar::of("CHZU").unwrap();
    assert_eq!(
        weekday_holidays(&chzu, 2024),
        vec![
            "2024-01-01",
            "2024-01-02",
            "2024-03-29",
            "2024-04-01",
            "2024-05-01",
            "2024-05-09",
            "2024-05-20",
            "2024-08-01",
            "2024-12-25",
            "2024-12-26",
        ]
    );
}

#[test]
fn test_tokyo_2024() {
    let jpto = HolidayCalendar::of("JPTO").unwrap();
    assert_eq!(
        weekday_holidays(&jpto, 2024),
        vec![
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-08",
            "2024-02-12",
            "2024-02-23",
            "2024-03-20",
            "2024-04-29",
            "2024-05-03",
            "2024-05-06",
            "2024-07-15",
            "2024-08-12",
            "2024-09-16",
            "2024-09-23",
            "2024-10-14",
            "2024-11-04",
            "2024-12-31",
        ]
    );
}

#[test]
fn test_stepping_over_a_long_weekend() {
    let gblo = HolidayCalendar::of("GBLO").unwrap();

    // Easter 2025: Good Friday 18th, Easter Monday 21st
    assert_eq!(gblo.next_or_same(date("2025-04-18")), date("2025-04-22"));
    assert_eq!(gblo.previous_or_same(date("2025-04-21")), date("2025-04-17"));
    assert_eq!(gblo.shift(date("2025-04-17"), 1), date("2025-04-22"));
    assert_eq!(gblo.shift(date("2025-04-22"), -1), date("2025-04-17"));
    assert_eq!(gblo.business_days_between(date("2025-04-17"), date("2025-04-22")), 1);
}

#[test]
fn test_trivial_calendars() {
    let none = HolidayCalendar::of("NoHolidays").unwrap();
    let weekends = HolidayCalendar::of("Sat/Sun").unwrap();
    let saturday = date("2025-03-15");

    assert!(none.is_business_day(saturday));
    assert!(!weekends.is_business_day(saturday));
    assert!(weekends.is_business_day(date("2025-12-25")));
}

#[test]
fn test_unknown_calendar() {
    let err = HolidayCalendar::of("XXXX").unwrap_err();
    assert!(err.to_string().contains("not found: 'XXXX'"));
}

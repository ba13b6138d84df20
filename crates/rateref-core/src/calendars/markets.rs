//! Built-in market holiday calendars.
//!
//! Each calendar is identified by its market code:
//!
//! | Code | Market |
//! |------|--------|
//! | `GBLO` | London bank holidays |
//! | `EUTA` | TARGET2 settlement days |
//! | `USNY` | New York Federal Reserve |
//! | `USGS` | US government securities (SIFMA) |
//! | `CHZU` | Zurich |
//! | `JPTO` | Tokyo bank holidays |
//! | `NoHolidays` | every day is a business day |
//! | `Sat/Sun` | weekends only |

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::rules::{
    last_weekday_of_month, nth_weekday_of_month, HolidayRules, HolidaySetCalendar, Observance,
};
use super::WeekendType;

/// All built-in calendars.
pub(crate) fn builtin() -> Vec<HolidaySetCalendar> {
    vec![
        no_holidays(),
        weekends_only(),
        london(),
        target(),
        new_york_fed(),
        us_government_securities(),
        zurich(),
        tokyo(),
    ]
}

fn no_holidays() -> HolidaySetCalendar {
    HolidayRules::new("NoHolidays")
        .weekend(WeekendType::None)
        .build()
}

fn weekends_only() -> HolidaySetCalendar {
    HolidayRules::new("Sat/Sun").build()
}

/// London bank holidays.
fn london() -> HolidaySetCalendar {
    HolidayRules::new("GBLO")
        .fixed(1, 1, Observance::NextMonday)
        .easter(-2)
        .easter(1)
        .custom(early_may_bank_holiday)
        .custom(spring_bank_holiday)
        .last_weekday(8, Weekday::Mon)
        .custom(christmas_with_substitutes)
        .dates([
            // royal wedding
            (2011, 4, 29),
            // diamond jubilee
            (2012, 6, 5),
            // platinum jubilee
            (2022, 6, 3),
            // state funeral
            (2022, 9, 19),
            // coronation
            (2023, 5, 8),
        ])
        .build()
}

fn early_may_bank_holiday(year: i32) -> Vec<NaiveDate> {
    // VE day anniversary
    if year == 2020 {
        return NaiveDate::from_ymd_opt(2020, 5, 8).into_iter().collect();
    }
    nth_weekday_of_month(year, 5, Weekday::Mon, 1)
        .into_iter()
        .collect()
}

fn spring_bank_holiday(year: i32) -> Vec<NaiveDate> {
    if year == 2022 {
        return NaiveDate::from_ymd_opt(2022, 6, 2).into_iter().collect();
    }
    last_weekday_of_month(year, 5, Weekday::Mon)
        .into_iter()
        .collect()
}

/// Christmas and Boxing Day, substituting forward when either falls on a weekend.
fn christmas_with_substitutes(year: i32) -> Vec<NaiveDate> {
    let Some(christmas) = NaiveDate::from_ymd_opt(year, 12, 25) else {
        return Vec::new();
    };
    let days: &[u32] = match christmas.weekday() {
        Weekday::Fri => &[25, 28],
        Weekday::Sat => &[27, 28],
        Weekday::Sun => &[26, 27],
        _ => &[25, 26],
    };
    days.iter()
        .filter_map(|&day| NaiveDate::from_ymd_opt(year, 12, day))
        .collect()
}

/// TARGET2 closing days.
fn target() -> HolidaySetCalendar {
    HolidayRules::new("EUTA")
        .fixed(1, 1, Observance::Actual)
        .easter(-2)
        .easter(1)
        .fixed(5, 1, Observance::Actual)
        .fixed(12, 25, Observance::Actual)
        .fixed(12, 26, Observance::Actual)
        .dates([(1999, 12, 31), (2001, 12, 31)])
        .build()
}

/// New York Federal Reserve holidays.
fn new_york_fed() -> HolidaySetCalendar {
    us_federal("USNY", Observance::SundayToMonday).build()
}

/// US government securities market, following SIFMA recommendations.
fn us_government_securities() -> HolidaySetCalendar {
    // a Saturday new year stays unobserved, unlike other fixed holidays
    us_federal("USGS", Observance::NearestWeekday)
        .easter(-2)
        .build()
}

fn us_federal(name: &str, observance: Observance) -> HolidayRules {
    HolidayRules::new(name)
        .fixed(1, 1, Observance::SundayToMonday)
        .nth_weekday(1, Weekday::Mon, 3)
        .nth_weekday(2, Weekday::Mon, 3)
        .last_weekday(5, Weekday::Mon)
        .fixed_from(6, 19, 2022, observance)
        .fixed(7, 4, observance)
        .nth_weekday(9, Weekday::Mon, 1)
        .nth_weekday(10, Weekday::Mon, 2)
        .fixed(11, 11, observance)
        .nth_weekday(11, Weekday::Thu, 4)
        .fixed(12, 25, observance)
}

/// Zurich bank holidays.
fn zurich() -> HolidaySetCalendar {
    HolidayRules::new("CHZU")
        .fixed(1, 1, Observance::Actual)
        .fixed(1, 2, Observance::Actual)
        .easter(-2)
        .easter(1)
        .easter(39)
        .easter(50)
        .fixed(5, 1, Observance::Actual)
        .fixed(8, 1, Observance::Actual)
        .fixed(12, 25, Observance::Actual)
        .fixed(12, 26, Observance::Actual)
        .build()
}

/// Tokyo bank holidays: Japanese national holidays plus the year-end closure.
fn tokyo() -> HolidaySetCalendar {
    HolidayRules::new("JPTO")
        .custom(japanese_national_holidays)
        .fixed(1, 2, Observance::Actual)
        .fixed(1, 3, Observance::Actual)
        .fixed(12, 31, Observance::Actual)
        .build()
}

fn japanese_national_holidays(year: i32) -> Vec<NaiveDate> {
    let mut fixed = vec![(1, 1), (2, 11), (4, 29), (5, 3), (5, 5), (11, 3), (11, 23)];
    fixed.push((3, equinox_day(20.8431, year)));
    fixed.push((9, equinox_day(23.2488, year)));

    // emperor's birthday
    if year >= 2020 {
        fixed.push((2, 23));
    } else if (1989..=2018).contains(&year) {
        fixed.push((12, 23));
    }
    if year >= 2007 {
        fixed.push((5, 4));
    }
    // fixed dates before the Happy Monday reforms
    if year < 2000 {
        fixed.extend([(1, 15), (10, 10)]);
    }
    if (1996..=2002).contains(&year) {
        fixed.push((7, 20));
    }
    if year < 2003 {
        fixed.push((9, 15));
    }
    match year {
        1989 => fixed.push((2, 24)),
        1990 => fixed.push((11, 12)),
        1993 => fixed.push((6, 9)),
        2019 => fixed.extend([(4, 30), (5, 1), (5, 2), (10, 22)]),
        // Olympic moves of Marine, Sports and Mountain Day
        2020 => fixed.extend([(7, 23), (7, 24), (8, 10)]),
        2021 => fixed.extend([(7, 22), (7, 23), (8, 8)]),
        _ => {}
    }
    let olympic_year = matches!(year, 2020 | 2021);
    if year >= 2016 && !olympic_year {
        fixed.push((8, 11));
    }

    let mut holidays: BTreeSet<NaiveDate> = fixed
        .into_iter()
        .filter_map(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .collect();

    let mut mondays = Vec::new();
    if year >= 2000 {
        mondays.push((1, 2));
        if !olympic_year {
            mondays.push((10, 2));
        }
    }
    if year >= 2003 {
        mondays.push((9, 3));
        if !olympic_year {
            mondays.push((7, 3));
        }
    }
    holidays.extend(
        mondays
            .into_iter()
            .filter_map(|(month, n)| nth_weekday_of_month(year, month, Weekday::Mon, n)),
    );

    // a weekday between two holidays is a holiday
    if year >= 1986 {
        let bridged: Vec<NaiveDate> = holidays
            .iter()
            .filter_map(|day| {
                let middle = day.succ_opt()?;
                let after = middle.succ_opt()?;
                let bridge = holidays.contains(&after)
                    && !holidays.contains(&middle)
                    && middle.weekday() != Weekday::Sun;
                bridge.then_some(middle)
            })
            .collect();
        holidays.extend(bridged);
    }

    // a Sunday holiday moves to the next day that is not already one
    if year >= 1973 {
        let sundays: Vec<NaiveDate> = holidays
            .iter()
            .copied()
            .filter(|day| day.weekday() == Weekday::Sun)
            .collect();
        for sunday in sundays {
            let substitute = sunday.iter_days().skip(1).find(|d| !holidays.contains(d));
            holidays.extend(substitute);
        }
    }

    holidays.into_iter().collect()
}

/// Day of March (vernal) or September (autumnal) of the equinox.
fn equinox_day(base: f64, year: i32) -> u32 {
    let y = f64::from(year - 1980);
    (base + 0.242_194 * y - (y / 4.0).floor()) as u32
}

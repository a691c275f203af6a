// SPDX-License-Identifier: MPL-2.0
//! Text for weekday headers, month selectors and day buttons.
//!
//! Pure functions of their inputs: the same date, format and locale always
//! yield the same string.

use chrono::{Datelike, NaiveDate, Weekday};

use super::locale::LocaleData;
use crate::domain::calendar::WeekdayFormat;

/// Seven weekday names in the locale's display order.
#[must_use]
pub fn weekday_names(format: WeekdayFormat, locale: &LocaleData) -> [String; 7] {
    let mut week = locale.calendar.week();
    std::array::from_fn(|_| {
        let weekday = week.next().unwrap_or(Weekday::Mon);
        weekday_name(weekday, format, locale)
    })
}

/// One weekday name in the requested format.
#[must_use]
pub fn weekday_name(weekday: Weekday, format: WeekdayFormat, locale: &LocaleData) -> String {
    let full = locale.calendar.weekday(weekday);
    match format {
        WeekdayFormat::OneChar => full.chars().take(1).collect(),
        WeekdayFormat::TwoChar => full.chars().take(2).collect(),
        WeekdayFormat::ThreeChar => locale.calendar.weekday_short(weekday).to_string(),
        WeekdayFormat::Full => full.to_string(),
    }
}

/// Full name of the month containing `date`.
#[must_use]
pub fn month_name(date: NaiveDate, locale: &LocaleData) -> String {
    locale.calendar.month(date.month0()).to_string()
}

/// Day of month without leading zero.
#[must_use]
pub fn day_number_label(date: NaiveDate) -> String {
    date.day().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn locale(tag: &str) -> LocaleData {
        LocaleData::resolve(Some(tag)).data
    }

    #[test]
    fn swedish_full_names_start_on_monday() {
        let names = weekday_names(WeekdayFormat::Full, &locale("sv"));
        assert_eq!(
            names,
            ["måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag"]
        );
    }

    #[test]
    fn us_names_start_on_sunday() {
        let names = weekday_names(WeekdayFormat::ThreeChar, &locale("en-US"));
        assert_eq!(names, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }

    #[test]
    fn short_formats_count_characters_not_bytes() {
        let sv = locale("sv");
        assert_eq!(weekday_name(Weekday::Sat, WeekdayFormat::OneChar, &sv), "l");
        assert_eq!(weekday_name(Weekday::Sat, WeekdayFormat::TwoChar, &sv), "lö");
        assert_eq!(weekday_name(Weekday::Thu, WeekdayFormat::ThreeChar, &sv), "tors");
    }

    #[test]
    fn every_format_yields_seven_non_empty_names() {
        for tag in ["sv", "en-US", "de", "fr"] {
            for format in WeekdayFormat::ALL {
                let names = weekday_names(format, &locale(tag));
                assert!(names.iter().all(|name| !name.is_empty()), "{tag} {format}");
            }
        }
    }

    #[test]
    fn month_and_day_labels() {
        assert_eq!(month_name(date(2024, 2, 10), &locale("sv")), "februari");
        assert_eq!(month_name(date(2024, 12, 1), &locale("en-US")), "December");
        assert_eq!(day_number_label(date(2024, 2, 5)), "5");
        assert_eq!(day_number_label(date(2024, 2, 29)), "29");
    }
}

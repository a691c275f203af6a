// SPDX-License-Identifier: MPL-2.0
//! Calendar arithmetic on [`NaiveDate`].
//!
//! Month and week boundaries, month/year setters with day clamping, and the
//! localized week-numbering rule used by the grid. All helpers saturate at the
//! limits of [`NaiveDate`] instead of panicking.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::{Error, Result};

/// Returns true for Gregorian leap years.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Moves `date` by a signed number of days, saturating at the calendar limits.
#[must_use]
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

/// First day of the month containing `date`.
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    shift_days(date, -i64::from(date.day0()))
}

/// Last day of the month containing `date`.
#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    shift_days(date, i64::from(last - date.day()))
}

/// First day of the week containing `date`, for weeks starting on `first_weekday`.
#[must_use]
pub fn start_of_week(date: NaiveDate, first_weekday: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - first_weekday.num_days_from_monday())
        % 7;
    shift_days(date, -i64::from(offset))
}

/// Last day of the week containing `date`, for weeks starting on `first_weekday`.
#[must_use]
pub fn end_of_week(date: NaiveDate, first_weekday: Weekday) -> NaiveDate {
    shift_days(start_of_week(date, first_weekday), 6)
}

/// Adds a signed number of calendar months.
///
/// The day of month is clamped to the length of the target month
/// (`2024-01-31 + 1 month = 2024-02-29`). Returns `None` past the calendar limits.
#[must_use]
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// Replaces the year, clamping Feb 29 to Feb 28 in common years.
#[must_use]
pub fn with_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day)
}

/// Replaces the month (0-based), clamping the day to the target month's length.
#[must_use]
pub fn with_month0(date: NaiveDate, month0: u32) -> Option<NaiveDate> {
    let month = month0 + 1;
    if month > 12 {
        return None;
    }
    let day = date.day().min(days_in_month(date.year(), month));
    NaiveDate::from_ymd_opt(date.year(), month, day)
}

/// Returns true if both dates fall in the same month of the same year.
#[must_use]
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Week number of the week that starts on `week_start`.
///
/// Week 1 is the first week of the year holding at least four of its days,
/// i.e. the week containing January 4th. The week belongs to the year of its
/// middle day (`week_start + 3`), so with Monday-start weeks this is exactly
/// the ISO-8601 week number. The last days of December can be week 1 and the
/// first days of January can be week 52 or 53.
#[must_use]
pub fn week_number(week_start: NaiveDate) -> u32 {
    let middle = shift_days(week_start, 3);
    middle.ordinal0() / 7 + 1
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the text is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|err| Error::InvalidDate(format!("'{}': {}", text.trim(), err)))
}

/// Parses a `YYYY-MM` month into its first day.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the text is not a valid year and month.
pub fn parse_month(text: &str) -> Result<NaiveDate> {
    parse_date(&format!("{}-01", text.trim()))
}

// SPDX-License-Identifier: MPL-2.0
//! Range checks that decide which days, months and years are interactive.
//!
//! All checks are inclusive and work at day granularity. They hold no state:
//! the grid asks them per day cell, and the month stepper and selectors ask
//! them before moving the displayed month.

use chrono::{Datelike, NaiveDate};

use super::dates;
use crate::domain::calendar::Direction;

/// Returns true if `start <= date <= end`.
#[must_use]
pub fn is_day_selectable(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Returns true if the month containing `anchor` overlaps `[start, end]`.
#[must_use]
pub fn is_month_reachable(anchor: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    dates::start_of_month(anchor) <= end && dates::end_of_month(anchor) >= start
}

/// Returns true if `year` overlaps `[start, end]`.
#[must_use]
pub fn is_year_reachable(year: i32, start: NaiveDate, end: NaiveDate) -> bool {
    start.year() <= year && year <= end.year()
}

/// Returns true if the month one step in `direction` from `current` overlaps
/// `[start, end]`.
#[must_use]
pub fn can_step_month(
    current: NaiveDate,
    direction: Direction,
    start: NaiveDate,
    end: NaiveDate,
) -> bool {
    dates::add_months(current, direction.months())
        .is_some_and(|target| is_month_reachable(target, start, end))
}

// SPDX-License-Identifier: MPL-2.0
//! Month grid construction.
//!
//! A grid always consists of complete weeks. The displayed month is widened
//! to the start of its first week and the end of its last week (using the
//! locale's first weekday), then cut into rows of seven days. Depending on
//! where the month falls this yields four, five or six rows; no case is
//! special-cased.

use chrono::{Datelike, NaiveDate};

use super::{bounds, dates};
use crate::config::DAYS_PER_WEEK;
use crate::i18n::LocaleData;
use crate::state::PickerState;

/// One day button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Weekday as days since Sunday (`0` = Sunday, `6` = Saturday).
    pub day_of_week_index: u8,
    /// The day is today according to the clock.
    pub is_current_day: bool,
    /// The day is the selected date.
    pub is_active_day: bool,
    /// The day lies within the selectable range.
    pub is_selectable: bool,
    /// The day belongs to the displayed month rather than a neighbor.
    pub in_display_month: bool,
}

/// One row of seven consecutive days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    pub week_number: u32,
    pub days: [DayCell; DAYS_PER_WEEK],
}

impl WeekRow {
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.days[0].date
    }

    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1].date
    }
}

/// Week rows of one displayed month, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    pub weeks: Vec<WeekRow>,
}

impl CalendarGrid {
    /// All cells in chronological order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Cell for `date`, if the grid shows it.
    #[must_use]
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }
}

/// Per-render markers that do not come from the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlights {
    pub today: NaiveDate,
    pub active: Option<NaiveDate>,
}

/// Builds the grid for the month of `display_date`.
#[must_use]
pub fn build(
    display_date: NaiveDate,
    locale: &LocaleData,
    start: NaiveDate,
    end: NaiveDate,
    highlights: Highlights,
) -> CalendarGrid {
    let first_weekday = locale.first_weekday();
    let month = dates::start_of_month(display_date);
    let grid_start = dates::start_of_week(month, first_weekday);
    let grid_end = dates::end_of_week(dates::end_of_month(display_date), first_weekday);

    let day_count = (grid_end - grid_start).num_days() + 1;
    let week_count = day_count / DAYS_PER_WEEK as i64;

    let weeks = (0..week_count)
        .map(|week| {
            let week_start = dates::shift_days(grid_start, week * DAYS_PER_WEEK as i64);
            WeekRow {
                week_number: dates::week_number(week_start),
                days: std::array::from_fn(|offset| {
                    let date = dates::shift_days(week_start, offset as i64);
                    cell(date, month, start, end, highlights)
                }),
            }
        })
        .collect();

    CalendarGrid { month, weeks }
}

/// Builds the grid of the month displayed by `state`.
#[must_use]
pub fn for_state(state: &PickerState, today: NaiveDate) -> CalendarGrid {
    build(
        state.display_date(),
        &state.options.locale,
        state.options.start,
        state.options.end,
        Highlights {
            today,
            active: state.active_date(),
        },
    )
}

fn cell(
    date: NaiveDate,
    month: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    highlights: Highlights,
) -> DayCell {
    DayCell {
        date,
        day_of_week_index: date.weekday().num_days_from_sunday() as u8,
        is_current_day: date == highlights.today,
        is_active_day: highlights.active == Some(date),
        is_selectable: bounds::is_day_selectable(date, start, end),
        in_display_month: dates::same_month(date, month),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Read-only snapshots for the presentation layer.
//!
//! A renderer draws the picker from three pieces: the [`HeaderRow`], the
//! month grid and the [`Controls`]. None of them holds a reference back into
//! the picker, so they can be kept across renders and compared cheaply.

use chrono::Datelike;

use crate::calendar::{bounds, selectors, MonthOption};
use crate::domain::calendar::Direction;
use crate::i18n::format;
use crate::options::DatePickerOptions;
use crate::state::PickerState;

/// Column titles above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    /// Title of the week-number column, if week numbers are shown.
    pub week_column_label: Option<String>,
    /// Weekday names from the locale's first weekday, if day names are shown.
    pub weekday_names: Option<[String; 7]>,
}

impl HeaderRow {
    /// All titles left to right.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.week_column_label
            .iter()
            .map(String::as_str)
            .chain(self.weekday_names.iter().flatten().map(String::as_str))
            .collect()
    }
}

/// Navigation controls above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub previous_month_label: String,
    pub next_month_label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    /// Year selector entries, ascending.
    pub years: Vec<i32>,
    /// False when fewer than two years are selectable.
    pub year_selector_enabled: bool,
    /// Month selector entries for the displayed year.
    pub months: Vec<MonthOption>,
    pub selected_year: i32,
    /// 0-based.
    pub selected_month_index: u32,
}

/// Header for `options`.
#[must_use]
pub fn header(options: &DatePickerOptions) -> HeaderRow {
    HeaderRow {
        week_column_label: options
            .shows_week_number()
            .then(|| options.locale.week_column_label.clone()),
        weekday_names: options
            .shows_day_names()
            .then(|| format::weekday_names(options.weekday_format, &options.locale)),
    }
}

/// Controls for the month displayed by `state`.
#[must_use]
pub fn controls(state: &PickerState) -> Controls {
    let options = &state.options;
    let display = state.display_date();
    let years = selectors::selectable_years(options.start, options.end);

    Controls {
        previous_month_label: options.locale.previous_month_label.clone(),
        next_month_label: options.locale.next_month_label.clone(),
        previous_enabled: bounds::can_step_month(
            display,
            Direction::Previous,
            options.start,
            options.end,
        ),
        next_enabled: bounds::can_step_month(display, Direction::Next, options.start, options.end),
        year_selector_enabled: years.len() >= 2,
        years,
        months: selectors::selectable_months(
            display.year(),
            options.start,
            options.end,
            &options.locale,
        ),
        selected_year: display.year(),
        selected_month_index: display.month0(),
    }
}

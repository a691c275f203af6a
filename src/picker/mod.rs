// SPDX-License-Identifier: MPL-2.0
//! The owning widget core.
//!
//! [`DatePicker`] wraps one [`PickerState`] and is the only place where the
//! state changes. It gates user interactions with the range checks, feeds the
//! surviving ones through the reducer, and reports new selections to the
//! embedder's change callback.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use datepicker::options::OptionOverrides;
//! use datepicker::picker::{DatePicker, FixedClock};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
//! let mut picker =
//!     DatePicker::initialize_with_clock(&OptionOverrides::default(), FixedClock(today)).unwrap();
//!
//! assert!(picker.select_day(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()));
//! assert_eq!(picker.active_date(), NaiveDate::from_ymd_opt(2024, 2, 14));
//!
//! // Before the range start
//! assert!(!picker.select_day(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
//! ```

mod clock;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use view::{Controls, HeaderRow};

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::calendar::{bounds, dates, grid, selectors, CalendarGrid, MonthOption};
use crate::diagnostics::{DiagnosticsHandle, StateChange, UserAction, WarningEvent, WarningType};
use crate::domain::calendar::Direction;
use crate::error::Result;
use crate::options::{self, DatePickerOptions, OptionOverrides};
use crate::state::{self, Action, PickerState};

type ChangeCallback = Box<dyn FnMut(NaiveDate)>;

/// One date picker instance.
pub struct DatePicker {
    state: PickerState,
    clock: Box<dyn Clock>,
    on_change: Option<ChangeCallback>,
    diagnostics: Option<DiagnosticsHandle>,
    locale_fell_back: bool,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("state", &self.state)
            .field("today", &self.clock.today())
            .field("on_change", &self.on_change.is_some())
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl DatePicker {
    /// Creates a picker using the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidRange`] if the resolved start is
    /// after the resolved end.
    pub fn initialize(overrides: &OptionOverrides) -> Result<Self> {
        Self::initialize_with_clock(overrides, SystemClock)
    }

    /// Creates a picker whose notion of today comes from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidRange`] if the resolved start is
    /// after the resolved end.
    pub fn initialize_with_clock(
        overrides: &OptionOverrides,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        let defaults = DatePickerOptions::defaults(clock.today());
        let resolution = options::resolve_detailed(&defaults, overrides)?;
        Ok(Self {
            state: PickerState::new(resolution.options),
            clock: Box::new(clock),
            on_change: None,
            diagnostics: None,
            locale_fell_back: resolution.locale_fell_back,
        })
    }

    /// Sets the callback invoked once for every new selection.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Records activity through `handle`.
    ///
    /// A locale fallback that happened during initialization is reported
    /// right away.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        if self.locale_fell_back {
            handle.log_warning(self.fallback_warning());
        }
        self.diagnostics = Some(handle);
        self
    }

    #[must_use]
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &DatePickerOptions {
        &self.state.options
    }

    #[must_use]
    pub fn display_date(&self) -> NaiveDate {
        self.state.display_date()
    }

    #[must_use]
    pub fn active_date(&self) -> Option<NaiveDate> {
        self.state.active_date()
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// True if the last resolved language had no catalog.
    #[must_use]
    pub fn locale_fell_back(&self) -> bool {
        self.locale_fell_back
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Applies `action` without any range check.
    ///
    /// Invokes the change callback when the selection moves to a new date.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.state.navigation;
        self.state = state::reduce(&self.state, action);
        let after = self.state.navigation;

        if after.display_date != before.display_date {
            self.log(|handle| {
                handle.log_state(StateChange::DisplayDate {
                    from: before.display_date,
                    to: after.display_date,
                });
            });
        }

        if let Some(selected) = after.active_date {
            if before.active_date != Some(selected) {
                self.log(|handle| {
                    handle.log_state(StateChange::ActiveDate {
                        from: before.active_date,
                        to: selected,
                    });
                });
                if let Some(callback) = self.on_change.as_mut() {
                    callback(selected);
                }
            }
        }
    }

    pub fn set_display_date(&mut self, date: NaiveDate) {
        self.dispatch(Action::SetDisplayDate(date));
    }

    pub fn set_active_date(&mut self, date: NaiveDate) {
        self.dispatch(Action::SetActiveDate(date));
    }

    /// Replaces the options, resolving `overrides` over fresh defaults.
    ///
    /// The displayed month and the selection are kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidRange`] if the resolved start is
    /// after the resolved end; the picker is left unchanged.
    pub fn reset(&mut self, overrides: &OptionOverrides) -> Result<()> {
        let defaults = DatePickerOptions::defaults(self.clock.today());
        let resolution = match options::resolve_detailed(&defaults, overrides) {
            Ok(resolution) => resolution,
            Err(error) => {
                self.log(|handle| {
                    handle.log_rejected(UserAction::Reset);
                    handle.log_warning(WarningEvent::new(
                        WarningType::InvalidOptions,
                        error.to_string(),
                    ));
                });
                return Err(error);
            }
        };

        let options = resolution.options;
        self.locale_fell_back = resolution.locale_fell_back;
        self.log(|handle| {
            handle.log_action(UserAction::Reset);
            handle.log_state(StateChange::OptionsReset {
                start: options.start,
                end: options.end,
                language: options.locale.calendar.language().to_string(),
            });
        });
        if self.locale_fell_back {
            let warning = self.fallback_warning();
            self.log(|handle| handle.log_warning(warning));
        }

        self.dispatch(Action::Reset(Box::new(options)));
        Ok(())
    }

    // =========================================================================
    // Gated interactions
    // =========================================================================

    /// Selects `date` if it lies within the range.
    ///
    /// Returns false and changes nothing otherwise.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        let action = UserAction::SelectDay { date };
        if !bounds::is_day_selectable(date, self.options().start, self.options().end) {
            self.reject(action, format!("{date} is outside the selectable range"));
            return false;
        }
        self.log(|handle| handle.log_action(action));
        self.set_active_date(date);
        true
    }

    /// Returns true if the month one step in `direction` can be displayed.
    #[must_use]
    pub fn can_step_month(&self, direction: Direction) -> bool {
        bounds::can_step_month(
            self.display_date(),
            direction,
            self.options().start,
            self.options().end,
        )
    }

    /// Shows the next or previous month if it overlaps the range.
    pub fn step_month(&mut self, direction: Direction) -> bool {
        let action = match direction {
            Direction::Next => UserAction::NextMonth,
            Direction::Previous => UserAction::PreviousMonth,
        };
        let target = dates::add_months(self.display_date(), direction.months())
            .filter(|_| self.can_step_month(direction));
        let Some(target) = target else {
            self.reject(action, "no selectable day in that month");
            return false;
        };
        self.log(|handle| handle.log_action(action));
        self.set_display_date(target);
        true
    }

    /// Shows the displayed month in `year`.
    ///
    /// If that month lies outside the range, the nearest range bound is
    /// shown instead. Returns false for years the range does not touch.
    pub fn select_year(&mut self, year: i32) -> bool {
        let action = UserAction::SelectYear { year };
        let target = dates::with_year(self.display_date(), year)
            .zip(self.options().range().ok())
            .filter(|(_, range)| range.years().contains(&year));
        let Some((target, range)) = target else {
            self.reject(action, format!("year {year} is outside the selectable range"));
            return false;
        };

        let target = if range.contains_month(target) {
            target
        } else {
            range.clamp(target)
        };
        self.log(|handle| handle.log_action(action));
        self.set_display_date(target);
        true
    }

    /// Shows month `month_index` (0-based) of the displayed year.
    ///
    /// Returns false for months without a selectable day.
    pub fn select_month(&mut self, month_index: u32) -> bool {
        let (start, end) = (self.options().start, self.options().end);
        let action = UserAction::SelectMonth { month_index };
        let target = dates::with_month0(self.display_date(), month_index)
            .filter(|target| bounds::is_month_reachable(*target, start, end));
        let Some(target) = target else {
            self.reject(action, format!("month {month_index} is not selectable"));
            return false;
        };
        self.log(|handle| handle.log_action(action));
        self.set_display_date(target);
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Grid of the displayed month.
    #[must_use]
    pub fn grid(&self) -> CalendarGrid {
        grid::for_state(&self.state, self.clock.today())
    }

    #[must_use]
    pub fn header(&self) -> HeaderRow {
        view::header(self.options())
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        view::controls(&self.state)
    }

    #[must_use]
    pub fn selectable_years(&self) -> Vec<i32> {
        selectors::selectable_years(self.options().start, self.options().end)
    }

    /// Month selector entries for the displayed year.
    #[must_use]
    pub fn selectable_months(&self) -> Vec<MonthOption> {
        selectors::selectable_months(
            self.display_date().year(),
            self.options().start,
            self.options().end,
            &self.options().locale,
        )
    }

    fn log(&self, record: impl FnOnce(&DiagnosticsHandle)) {
        if let Some(handle) = &self.diagnostics {
            record(handle);
        }
    }

    fn reject(&self, action: UserAction, message: impl Into<String>) {
        self.log(|handle| {
            handle.log_rejected(action);
            handle.log_warning(WarningEvent::new(WarningType::OutOfRange, message));
        });
    }

    fn fallback_warning(&self) -> WarningEvent {
        WarningEvent::new(
            WarningType::LocaleFallback,
            format!(
                "no catalog for the requested language, using '{}'",
                self.options().locale.calendar.language()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::error::Error;
    use crate::options::LocaleOverrides;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ranged(start: NaiveDate, end: NaiveDate) -> OptionOverrides {
        OptionOverrides {
            start: Some(start),
            end: Some(end),
            ..OptionOverrides::default()
        }
    }

    fn picker(start: NaiveDate, end: NaiveDate) -> DatePicker {
        DatePicker::initialize_with_clock(&ranged(start, end), FixedClock(date(2024, 1, 15)))
            .unwrap()
    }

    fn recording_picker() -> (DatePicker, Rc<RefCell<Vec<NaiveDate>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let picker = picker(date(2024, 1, 1), date(2024, 12, 31))
            .on_change(move |selected| sink.borrow_mut().push(selected));
        (picker, calls)
    }

    #[test]
    fn initialize_uses_clock_for_defaults() {
        let picker = DatePicker::initialize_with_clock(
            &OptionOverrides::default(),
            FixedClock(date(2024, 3, 1)),
        )
        .unwrap();
        assert_eq!(picker.options().start, date(2024, 3, 1));
        assert_eq!(picker.options().end, date(2029, 3, 1));
        assert_eq!(picker.display_date(), date(2024, 3, 1));
        assert_eq!(picker.active_date(), None);
    }

    #[test]
    fn initialize_rejects_reversed_range() {
        let result = DatePicker::initialize_with_clock(
            &ranged(date(2024, 2, 1), date(2024, 1, 1)),
            FixedClock(date(2024, 1, 1)),
        );
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn selecting_a_day_fires_on_change_once() {
        let (mut picker, calls) = recording_picker();

        assert!(picker.select_day(date(2024, 2, 14)));

        assert_eq!(picker.active_date(), Some(date(2024, 2, 14)));
        assert_eq!(*calls.borrow(), vec![date(2024, 2, 14)]);
    }

    #[test]
    fn reselecting_the_same_day_does_not_fire_again() {
        let (mut picker, calls) = recording_picker();

        picker.select_day(date(2024, 2, 14));
        picker.select_day(date(2024, 2, 14));
        picker.select_day(date(2024, 2, 15));

        assert_eq!(*calls.borrow(), vec![date(2024, 2, 14), date(2024, 2, 15)]);
    }

    #[test]
    fn out_of_range_day_is_ignored() {
        let (mut picker, calls) = recording_picker();

        assert!(!picker.select_day(date(2025, 1, 1)));

        assert_eq!(picker.active_date(), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn navigation_does_not_fire_on_change() {
        let (mut picker, calls) = recording_picker();

        picker.step_month(Direction::Next);
        picker.select_month(5);

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn step_month_stops_at_range_edges() {
        let mut picker = picker(date(2024, 3, 15), date(2024, 5, 10));

        assert!(!picker.step_month(Direction::Previous));
        assert_eq!(picker.display_date(), date(2024, 3, 15));

        assert!(picker.step_month(Direction::Next));
        assert!(picker.step_month(Direction::Next));
        assert_eq!(picker.display_date(), date(2024, 5, 15));

        assert!(!picker.can_step_month(Direction::Next));
        assert!(!picker.step_month(Direction::Next));
        assert_eq!(picker.display_date(), date(2024, 5, 15));
    }

    #[test]
    fn step_month_clamps_day_of_month() {
        let mut picker = picker(date(2024, 1, 31), date(2024, 12, 31));
        assert!(picker.step_month(Direction::Next));
        assert_eq!(picker.display_date(), date(2024, 2, 29));
    }

    #[test]
    fn select_year_keeps_month() {
        let mut picker = picker(date(2023, 6, 10), date(2026, 12, 31));
        assert!(picker.select_year(2025));
        assert_eq!(picker.display_date(), date(2025, 6, 10));
    }

    #[test]
    fn select_year_clamps_into_range() {
        let mut picker = picker(date(2023, 6, 10), date(2025, 3, 20));

        assert!(picker.select_year(2025));
        assert_eq!(picker.display_date(), date(2025, 3, 20));

        picker.set_display_date(date(2024, 2, 1));
        assert!(picker.select_year(2023));
        assert_eq!(picker.display_date(), date(2023, 6, 10));
    }

    #[test]
    fn select_year_at_range_edges_lands_on_bounds() {
        let mut picker = picker(date(2024, 11, 20), date(2026, 2, 5));
        picker.set_display_date(date(2025, 1, 31));

        assert!(picker.select_year(2024));
        assert_eq!(picker.display_date(), date(2024, 11, 20));

        picker.set_display_date(date(2025, 12, 1));
        assert!(picker.select_year(2026));
        assert_eq!(picker.display_date(), date(2026, 2, 5));
        assert!(picker.grid().cell(date(2026, 2, 5)).unwrap().is_selectable);
    }

    #[test]
    fn select_year_outside_range_is_ignored() {
        let mut picker = picker(date(2023, 6, 10), date(2025, 3, 20));
        assert!(!picker.select_year(2030));
        assert_eq!(picker.display_date(), date(2023, 6, 10));
    }

    #[test]
    fn select_month_keeps_year_and_checks_range() {
        let mut picker = picker(date(2024, 3, 31), date(2024, 11, 1));

        assert!(picker.select_month(3));
        assert_eq!(picker.display_date(), date(2024, 4, 30));

        assert!(!picker.select_month(0));
        assert!(!picker.select_month(12));
        assert_eq!(picker.display_date(), date(2024, 4, 30));
    }

    #[test]
    fn reset_keeps_navigation_and_swaps_language() {
        let mut picker = picker(date(2024, 1, 1), date(2024, 12, 31));
        picker.select_day(date(2024, 2, 2));
        picker.step_month(Direction::Next);
        let navigation = picker.state().navigation;

        let overrides = OptionOverrides {
            locale: LocaleOverrides {
                language: Some("de".to_string()),
                ..LocaleOverrides::default()
            },
            ..ranged(date(2024, 1, 1), date(2024, 12, 31))
        };
        picker.reset(&overrides).unwrap();

        assert_eq!(picker.state().navigation, navigation);
        assert_eq!(picker.options().locale.calendar.language().to_string(), "de");
        assert!(!picker.locale_fell_back());
    }

    #[test]
    fn failed_reset_leaves_picker_unchanged() {
        let mut picker = picker(date(2024, 1, 1), date(2024, 12, 31));
        let before = picker.state().clone();

        let result = picker.reset(&ranged(date(2024, 6, 1), date(2024, 5, 1)));

        assert!(matches!(result, Err(Error::InvalidRange { .. })));
        assert_eq!(*picker.state(), before);
    }

    #[test]
    fn grid_marks_today_and_selection() {
        let mut picker = picker(date(2024, 1, 1), date(2024, 12, 31));
        picker.select_day(date(2024, 1, 20));

        let grid = picker.grid();
        assert!(grid.cell(date(2024, 1, 15)).unwrap().is_current_day);
        assert!(grid.cell(date(2024, 1, 20)).unwrap().is_active_day);
        assert_eq!(grid.days().filter(|cell| cell.is_active_day).count(), 1);
    }

    #[test]
    fn diagnostics_record_accepted_and_rejected_actions() {
        let mut collector = DiagnosticsCollector::default();
        let mut picker =
            picker(date(2024, 1, 1), date(2024, 1, 31)).with_diagnostics(collector.handle());

        picker.select_day(date(2024, 1, 5));
        picker.step_month(Direction::Next);
        collector.process_pending();

        let kinds: Vec<DiagnosticEventKind> =
            collector.iter().map(|event| event.kind.clone()).collect();
        assert!(kinds.contains(&DiagnosticEventKind::UserAction {
            action: UserAction::SelectDay {
                date: date(2024, 1, 5)
            },
            accepted: true,
        }));
        assert!(kinds.contains(&DiagnosticEventKind::StateChange {
            change: StateChange::ActiveDate {
                from: None,
                to: date(2024, 1, 5)
            },
        }));
        assert!(kinds.contains(&DiagnosticEventKind::UserAction {
            action: UserAction::NextMonth,
            accepted: false,
        }));
        assert!(kinds.iter().any(|kind| matches!(
            kind,
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::OutOfRange
        )));
    }

    #[test]
    fn locale_fallback_is_reported_on_attach() {
        let mut collector = DiagnosticsCollector::default();
        let overrides = OptionOverrides {
            locale: LocaleOverrides {
                language: Some("tlh".to_string()),
                ..LocaleOverrides::default()
            },
            ..OptionOverrides::default()
        };
        let picker = DatePicker::initialize_with_clock(&overrides, FixedClock(date(2024, 1, 1)))
            .unwrap()
            .with_diagnostics(collector.handle());
        collector.process_pending();

        assert!(picker.locale_fell_back());
        assert_eq!(picker.options().locale.week_column_label, "Vecka");
        assert!(collector.iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::Warning { event } if event.warning_type == WarningType::LocaleFallback
        )));
    }
}

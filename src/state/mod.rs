// SPDX-License-Identifier: MPL-2.0
//! Navigation state machine.
//!
//! [`PickerState`] is the single source of truth for one picker: its resolved
//! options, the displayed month and the selected ("active") date. It changes
//! only through [`reduce`], a total and side-effect-free function of the
//! current state and an [`Action`].
//!
//! The reducer never clamps: callers check the move with the range checks in
//! [`crate::calendar::bounds`] first.

use chrono::NaiveDate;

use crate::error::Result;
use crate::options::{self, DatePickerOptions, OptionOverrides};

/// Displayed month and selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Some day of the displayed month. Only its year and month matter.
    pub display_date: NaiveDate,
    /// The committed selection, if any.
    pub active_date: Option<NaiveDate>,
}

impl NavigationState {
    /// Initial navigation: the first selectable month is shown, nothing is selected.
    #[must_use]
    pub fn new(start: NaiveDate) -> Self {
        Self {
            display_date: start,
            active_date: None,
        }
    }
}

/// Everything a picker instance owns.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub options: DatePickerOptions,
    pub navigation: NavigationState,
}

impl PickerState {
    #[must_use]
    pub fn new(options: DatePickerOptions) -> Self {
        let navigation = NavigationState::new(options.start);
        Self {
            options,
            navigation,
        }
    }

    #[must_use]
    pub fn display_date(&self) -> NaiveDate {
        self.navigation.display_date
    }

    #[must_use]
    pub fn active_date(&self) -> Option<NaiveDate> {
        self.navigation.active_date
    }
}

/// Resolves `overrides` over `defaults` and builds the initial state.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidRange`] if the resolved range is empty.
pub fn initialize(defaults: &DatePickerOptions, overrides: &OptionOverrides) -> Result<PickerState> {
    options::resolve(defaults, overrides).map(PickerState::new)
}

/// State transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replaces the resolved options. Navigation is kept as is.
    Reset(Box<DatePickerOptions>),
    /// Shows the month of the given date.
    SetDisplayDate(NaiveDate),
    /// Selects the given date.
    SetActiveDate(NaiveDate),
}

/// Applies `action` to `state`.
#[must_use]
pub fn reduce(state: &PickerState, action: Action) -> PickerState {
    match action {
        Action::Reset(options) => PickerState {
            options: *options,
            navigation: state.navigation,
        },
        Action::SetDisplayDate(display_date) => PickerState {
            navigation: NavigationState {
                display_date,
                ..state.navigation
            },
            ..state.clone()
        },
        Action::SetActiveDate(active_date) => PickerState {
            navigation: NavigationState {
                active_date: Some(active_date),
                ..state.navigation
            },
            ..state.clone()
        },
    }
}

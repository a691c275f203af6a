// SPDX-License-Identifier: MPL-2.0
//! Picker options and their resolution.
//!
//! [`DatePickerOptions`] is the fully populated, immutable configuration of
//! one widget instance. Callers describe what they want changed with an
//! [`OptionOverrides`]; [`resolve`] lays the overrides over a set of defaults.
//!
//! Overrides merge field by field. The nested locale overrides merge the same
//! way, so overriding one label keeps the other labels and the language of
//! the defaults.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use datepicker::options::{self, DatePickerOptions, LocaleOverrides, OptionOverrides};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let defaults = DatePickerOptions::defaults(today);
//! let overrides = OptionOverrides {
//!     end: NaiveDate::from_ymd_opt(2024, 11, 1),
//!     locale: LocaleOverrides {
//!         week_column_label: Some("V.".to_string()),
//!         ..LocaleOverrides::default()
//!     },
//!     ..OptionOverrides::default()
//! };
//!
//! let resolved = options::resolve(&defaults, &overrides).unwrap();
//! assert_eq!(resolved.start, today);
//! assert_eq!(resolved.locale.week_column_label, "V.");
//! assert_eq!(resolved.locale.next_month_label, "Nästa månad");
//! ```

use chrono::NaiveDate;

use crate::calendar::dates;
use crate::calendar::DateRange;
use crate::config::DEFAULT_RANGE_YEARS;
use crate::domain::calendar::{CalendarType, WeekdayFormat};
use crate::error::Result;
use crate::i18n::LocaleData;

/// Resolved configuration of one picker.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerOptions {
    /// First selectable date (inclusive).
    pub start: NaiveDate,
    /// Last selectable date (inclusive).
    pub end: NaiveDate,
    pub locale: LocaleData,
    pub calendar_type: CalendarType,
    pub weekday_format: WeekdayFormat,
    /// Whether the presentation layer animates month changes.
    pub transitions: bool,
}

impl DatePickerOptions {
    /// Documented defaults: today through today plus five years, Swedish
    /// locale, week numbers and full weekday names, no transitions.
    #[must_use]
    pub fn defaults(today: NaiveDate) -> Self {
        let years = i32::try_from(DEFAULT_RANGE_YEARS).unwrap_or(i32::MAX);
        let end = dates::add_months(today, years.saturating_mul(12)).unwrap_or(NaiveDate::MAX);
        Self {
            start: today,
            end,
            locale: LocaleData::builtin(),
            calendar_type: CalendarType::default(),
            weekday_format: WeekdayFormat::default(),
            transitions: false,
        }
    }

    /// The selectable range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidRange`] if `start` is after `end`.
    pub fn range(&self) -> Result<DateRange> {
        DateRange::new(self.start, self.end)
    }

    #[must_use]
    pub fn shows_week_number(&self) -> bool {
        self.calendar_type.shows_week_number()
    }

    #[must_use]
    pub fn shows_day_names(&self) -> bool {
        self.calendar_type.shows_day_names()
    }
}

/// Partial locale settings. `None` keeps the underlying value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleOverrides {
    /// Catalog language, e.g. `en-US`. Labels follow the language unless
    /// overridden below.
    pub language: Option<String>,
    pub next_month_label: Option<String>,
    pub previous_month_label: Option<String>,
    pub week_column_label: Option<String>,
}

impl LocaleOverrides {
    /// Lays `other` over `self`; fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: LocaleOverrides) -> Self {
        Self {
            language: other.language.or(self.language),
            next_month_label: other.next_month_label.or(self.next_month_label),
            previous_month_label: other.previous_month_label.or(self.previous_month_label),
            week_column_label: other.week_column_label.or(self.week_column_label),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial picker settings. `None` keeps the underlying value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionOverrides {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub locale: LocaleOverrides,
    pub calendar_type: Option<CalendarType>,
    pub weekday_format: Option<WeekdayFormat>,
    pub transitions: Option<bool>,
}

impl OptionOverrides {
    /// Lays `other` over `self`; fields set in `other` win, locale fields
    /// merge individually.
    #[must_use]
    pub fn merge(self, other: OptionOverrides) -> Self {
        Self {
            start: other.start.or(self.start),
            end: other.end.or(self.end),
            locale: self.locale.merge(other.locale),
            calendar_type: other.calendar_type.or(self.calendar_type),
            weekday_format: other.weekday_format.or(self.weekday_format),
            transitions: other.transitions.or(self.transitions),
        }
    }
}

/// Options produced by [`resolve_detailed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub options: DatePickerOptions,
    /// True if the requested language had no catalog and the default was used.
    pub locale_fell_back: bool,
}

/// Lays `overrides` over `defaults`.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidRange`] if the resolved start is after the
/// resolved end. Ranges are never silently corrected.
pub fn resolve(defaults: &DatePickerOptions, overrides: &OptionOverrides) -> Result<DatePickerOptions> {
    resolve_detailed(defaults, overrides).map(|resolution| resolution.options)
}

/// Like [`resolve`], also reporting whether the locale fell back.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidRange`] if the resolved start is after the
/// resolved end.
pub fn resolve_detailed(
    defaults: &DatePickerOptions,
    overrides: &OptionOverrides,
) -> Result<Resolution> {
    let range = DateRange::new(
        overrides.start.unwrap_or(defaults.start),
        overrides.end.unwrap_or(defaults.end),
    )?;

    let (locale, locale_fell_back) = resolve_locale(&defaults.locale, &overrides.locale);

    Ok(Resolution {
        options: DatePickerOptions {
            start: range.start(),
            end: range.end(),
            locale,
            calendar_type: overrides.calendar_type.unwrap_or(defaults.calendar_type),
            weekday_format: overrides.weekday_format.unwrap_or(defaults.weekday_format),
            transitions: overrides.transitions.unwrap_or(defaults.transitions),
        },
        locale_fell_back,
    })
}

fn resolve_locale(defaults: &LocaleData, overrides: &LocaleOverrides) -> (LocaleData, bool) {
    let (mut locale, fell_back) = match overrides.language.as_deref() {
        Some(language) => {
            let resolution = LocaleData::resolve(Some(language));
            (resolution.data, resolution.fell_back)
        }
        None => (defaults.clone(), false),
    };

    if let Some(label) = &overrides.next_month_label {
        locale.next_month_label.clone_from(label);
    }
    if let Some(label) = &overrides.previous_month_label {
        locale.previous_month_label.clone_from(label);
    }
    if let Some(label) = &overrides.week_column_label {
        locale.week_column_label.clone_from(label);
    }

    (locale, fell_back)
}

// SPDX-License-Identifier: MPL-2.0
//! Locale data consumed by the calendar core.
//!
//! [`LocaleData`] carries the three navigation labels plus a
//! [`CalendarLocale`], which holds the names and week convention the
//! formatting functions need. Both are plain values resolved once from the
//! embedded catalogs, so formatting never touches the catalogs again.

use chrono::Weekday;
use unic_langid::LanguageIdentifier;

use super::fluent::I18n;

const MONTH_KEYS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAY_KEYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Names and week convention of one calendar locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLocale {
    language: LanguageIdentifier,
    first_weekday: Weekday,
    months: [String; 12],
    /// Monday first.
    weekdays: [String; 7],
    /// Monday first.
    weekdays_short: [String; 7],
}

impl CalendarLocale {
    /// Reads the calendar names of the current locale of `i18n`.
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        let first_weekday = parse_weekday(&i18n.tr("locale-first-weekday")).unwrap_or(Weekday::Mon);
        Self {
            language: i18n.current_locale().clone(),
            first_weekday,
            months: MONTH_KEYS.map(|key| i18n.tr(&format!("month-{key}"))),
            weekdays: WEEKDAY_KEYS.map(|key| i18n.tr(&format!("weekday-{key}"))),
            weekdays_short: WEEKDAY_KEYS.map(|key| i18n.tr(&format!("weekday-{key}-short"))),
        }
    }

    #[must_use]
    pub fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// Day the locale's weeks start on.
    #[must_use]
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Full month name for a 0-based month index.
    #[must_use]
    pub fn month(&self, month0: u32) -> &str {
        self.months.get(month0 as usize).map_or("", String::as_str)
    }

    /// Full weekday name.
    #[must_use]
    pub fn weekday(&self, weekday: Weekday) -> &str {
        &self.weekdays[weekday.num_days_from_monday() as usize]
    }

    /// Abbreviated weekday name.
    #[must_use]
    pub fn weekday_short(&self, weekday: Weekday) -> &str {
        &self.weekdays_short[weekday.num_days_from_monday() as usize]
    }

    /// The seven weekdays in display order, starting from the first weekday.
    pub fn week(&self) -> impl Iterator<Item = Weekday> {
        let first = self.first_weekday;
        (0..7u8).scan(first, |day, _| {
            let current = *day;
            *day = current.succ();
            Some(current)
        })
    }
}

/// Labels and calendar names for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleData {
    pub next_month_label: String,
    pub previous_month_label: String,
    pub week_column_label: String,
    pub calendar: CalendarLocale,
}

impl LocaleData {
    /// Builds locale data from the current locale of `i18n`.
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            next_month_label: i18n.tr("label-next-month"),
            previous_month_label: i18n.tr("label-previous-month"),
            week_column_label: i18n.tr("label-week"),
            calendar: CalendarLocale::from_i18n(i18n),
        }
    }

    /// Resolves `language` against the embedded catalogs.
    ///
    /// Unknown or missing languages fall back to the built-in default locale;
    /// [`LocaleResolution::fell_back`] tells whether that happened.
    #[must_use]
    pub fn resolve(language: Option<&str>) -> LocaleResolution {
        let i18n = I18n::new(language, None);
        let fell_back = language.is_some_and(|lang| i18n.match_locale(lang).is_none());
        LocaleResolution {
            data: Self::from_i18n(&i18n),
            fell_back,
        }
    }

    /// Locale data of the built-in default locale.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_i18n(&I18n::default())
    }

    #[must_use]
    pub fn first_weekday(&self) -> Weekday {
        self.calendar.first_weekday()
    }
}

impl Default for LocaleData {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Result of [`LocaleData::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolution {
    pub data: LocaleData,
    /// True if the requested language had no catalog.
    pub fell_back: bool,
}

fn parse_weekday(text: &str) -> Option<Weekday> {
    text.trim().parse().ok()
}

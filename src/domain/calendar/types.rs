// SPDX-License-Identifier: MPL-2.0
//! Calendar option enums.
//!
//! These enums describe how a month grid is laid out and labeled. They parse
//! from and print to the kebab-case names used in settings files and on the
//! command line.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Parse Error
// =============================================================================

/// Error returned when an option name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    /// Kind of option being parsed (e.g. `calendar type`).
    pub option: &'static str,
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.option, self.value)
    }
}

impl std::error::Error for ParseOptionError {}

// =============================================================================
// CalendarType
// =============================================================================

/// Which optional parts of the grid are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarType {
    /// Week numbers and weekday names.
    #[default]
    Default,
    /// Weekday names only.
    NoWeekNumber,
    /// Week numbers only.
    NoDayName,
    /// Neither week numbers nor weekday names.
    NoWeekNumberAndDayName,
}

impl CalendarType {
    /// All calendar types, in declaration order.
    pub const ALL: [CalendarType; 4] = [
        CalendarType::Default,
        CalendarType::NoWeekNumber,
        CalendarType::NoDayName,
        CalendarType::NoWeekNumberAndDayName,
    ];

    /// Returns true if the week number column is rendered.
    #[must_use]
    pub fn shows_week_number(self) -> bool {
        matches!(self, Self::Default | Self::NoDayName)
    }

    /// Returns true if the weekday header row is rendered.
    #[must_use]
    pub fn shows_day_names(self) -> bool {
        matches!(self, Self::Default | Self::NoWeekNumber)
    }

    /// Returns the settings-file name of this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NoWeekNumber => "no-week-number",
            Self::NoDayName => "no-day-name",
            Self::NoWeekNumberAndDayName => "no-week-number-and-day-name",
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOptionError {
                option: "calendar type",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// WeekdayFormat
// =============================================================================

/// How weekday names are printed in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayFormat {
    /// First character of the name (`M`).
    OneChar,
    /// First two characters of the name (`Mo`).
    TwoChar,
    /// The locale's abbreviated name (`Mon`).
    ThreeChar,
    /// The full name (`Monday`).
    #[default]
    Full,
}

impl WeekdayFormat {
    /// All weekday formats, shortest first.
    pub const ALL: [WeekdayFormat; 4] = [
        WeekdayFormat::OneChar,
        WeekdayFormat::TwoChar,
        WeekdayFormat::ThreeChar,
        WeekdayFormat::Full,
    ];

    /// Returns the settings-file name of this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneChar => "one-char",
            Self::TwoChar => "two-char",
            Self::ThreeChar => "three-char",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for WeekdayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekdayFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOptionError {
                option: "weekday format",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Month stepping direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Returns the month offset for one step (`+1` or `-1`).
    #[must_use]
    pub fn months(self) -> i32 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calendar_type_shows_everything() {
        let kind = CalendarType::default();
        assert!(kind.shows_week_number());
        assert!(kind.shows_day_names());
    }

    #[test]
    fn calendar_type_flags_follow_variant() {
        assert!(!CalendarType::NoWeekNumber.shows_week_number());
        assert!(CalendarType::NoWeekNumber.shows_day_names());
        assert!(CalendarType::NoDayName.shows_week_number());
        assert!(!CalendarType::NoDayName.shows_day_names());
        assert!(!CalendarType::NoWeekNumberAndDayName.shows_week_number());
        assert!(!CalendarType::NoWeekNumberAndDayName.shows_day_names());
    }

    #[test]
    fn calendar_type_parses_its_own_names() {
        for kind in CalendarType::ALL {
            assert_eq!(kind.as_str().parse::<CalendarType>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_weekday_format_is_rejected() {
        let err = "tiny".parse::<WeekdayFormat>().unwrap_err();
        assert_eq!(err.option, "weekday format");
        assert_eq!(err.to_string(), "unknown weekday format: 'tiny'");
    }

    #[test]
    fn weekday_format_parse_ignores_case_and_whitespace() {
        assert_eq!(" Three-Char ".parse::<WeekdayFormat>(), Ok(WeekdayFormat::ThreeChar));
        assert_eq!(WeekdayFormat::default(), WeekdayFormat::Full);
    }

    #[test]
    fn direction_month_offsets() {
        assert_eq!(Direction::Next.months(), 1);
        assert_eq!(Direction::Previous.months(), -1);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for picker activity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated picker interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A day button was pressed.
    SelectDay { date: NaiveDate },

    /// The next-month control was pressed.
    NextMonth,

    /// The previous-month control was pressed.
    PreviousMonth,

    /// A year was picked in the year selector.
    SelectYear { year: i32 },

    /// A month was picked in the month selector (0-based).
    SelectMonth { month_index: u32 },

    /// New options were supplied.
    Reset,
}

/// Changes to the navigation state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum StateChange {
    /// The displayed month moved.
    DisplayDate { from: NaiveDate, to: NaiveDate },

    /// The selection changed.
    ActiveDate {
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<NaiveDate>,
        to: NaiveDate,
    },

    /// The options were replaced.
    OptionsReset {
        start: NaiveDate,
        end: NaiveDate,
        language: String,
    },
}

/// Category of a warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// An interaction would have left the selectable range and was ignored.
    OutOfRange,
    /// The requested language had no catalog; the default locale was used.
    LocaleFallback,
    /// Supplied options could not be resolved.
    InvalidOptions,
}

/// A non-fatal problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// False if range checks rejected the interaction.
        accepted: bool,
    },
    StateChange {
        change: StateChange,
    },
    Warning {
        event: WarningEvent,
    },
}

/// A timestamped event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn user_action_serializes_with_tag() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::SelectDay {
                date: date(2024, 2, 3),
            },
            accepted: true,
        };
        let json = serde_json::to_value(&kind).expect("serialization should succeed");
        assert_eq!(json["type"], "user_action");
        assert_eq!(json["action"]["action"], "select_day");
        assert_eq!(json["action"]["date"], "2024-02-03");
        assert_eq!(json["accepted"], true);
    }

    #[test]
    fn first_selection_omits_previous_date() {
        let change = StateChange::ActiveDate {
            from: None,
            to: date(2024, 2, 3),
        };
        let json = serde_json::to_string(&change).expect("serialization should succeed");
        assert_eq!(json, r#"{"change":"active_date","to":"2024-02-03"}"#);
    }

    #[test]
    fn warning_event_deserializes() {
        let json = r#"{"warning_type":"locale_fallback","message":"no catalog for 'tlh'"}"#;
        let event: WarningEvent =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(event.warning_type, WarningType::LocaleFallback);
        assert!(event.message.contains("tlh"));
    }

    #[test]
    fn event_is_stamped_at_creation() {
        let before = Utc::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::Reset,
            accepted: true,
        });
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Utc::now());
    }
}

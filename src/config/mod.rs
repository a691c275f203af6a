// SPDX-License-Identifier: MPL-2.0
//! This module handles the picker's settings file, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! Settings are a flat, human-editable view of [`OptionOverrides`]. Dates are
//! quoted `YYYY-MM-DD` strings.
//!
//! ```toml
//! language = "en-US"
//! start = "2024-01-10"
//! end = "2024-12-31"
//! calendar_type = "no-week-number"
//! weekday_format = "three-char"
//!
//! [labels]
//! week = "Wk"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use datepicker::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::calendar::{CalendarType, WeekdayFormat};
use crate::error::Result;
use crate::options::{LocaleOverrides, OptionOverrides};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DatePicker";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_type: Option<CalendarType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_format: Option<WeekdayFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<bool>,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

/// Navigation label overrides (`[labels]` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<String>,
}

impl Labels {
    fn is_empty(&self) -> bool {
        self.next_month.is_none() && self.previous_month.is_none() && self.week.is_none()
    }
}

impl Config {
    /// The settings as picker overrides.
    #[must_use]
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            start: self.start,
            end: self.end,
            locale: LocaleOverrides {
                language: self.language.clone(),
                next_month_label: self.labels.next_month.clone(),
                previous_month_label: self.labels.previous_month.clone(),
                week_column_label: self.labels.week.clone(),
            },
            calendar_type: self.calendar_type,
            weekday_format: self.weekday_format,
            transitions: self.transitions,
        }
    }
}

impl From<&Config> for OptionOverrides {
    fn from(config: &Config) -> Self {
        config.overrides()
    }
}

macro_rules! serde_as_str {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_as_str!(CalendarType);
serde_as_str!(WeekdayFormat);

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Reads settings from the platform config directory
/// (`<config dir>/DatePicker/settings.toml`). A missing file or an unknown
/// config directory yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Writes settings to the platform config directory, creating it if needed.
/// Does nothing when the platform has no config directory.
///
/// # Errors
///
/// Returns an error if serialization or any file operation fails.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads settings from `path`. Unparsable content yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Reads settings from `path`, rejecting unparsable content.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid settings TOML.
pub fn load_strict_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes settings to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any file operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            start: Some(date(2024, 1, 10)),
            end: Some(date(2024, 12, 31)),
            calendar_type: Some(CalendarType::NoDayName),
            weekday_format: Some(WeekdayFormat::ThreeChar),
            transitions: Some(true),
            labels: Labels {
                week: Some("Sem.".to_string()),
                ..Labels::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn default_config_path_is_under_app_directory() {
        if let Some(path) = get_default_config_path() {
            assert!(path.ends_with(Path::new(APP_NAME).join(CONFIG_FILE)));
        }
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn strict_load_reports_unknown_option_names() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "calendar_type = \"sideways\"\n").expect("failed to write");

        let err = load_strict_from_path(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(message) if message.contains("sideways")));
    }

    #[test]
    fn load_from_missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn parses_handwritten_settings() {
        let config: Config = toml::from_str(
            r#"
            language = "en-US"
            start = "2024-01-10"
            weekday_format = "one-char"

            [labels]
            next_month = "Forward"
            "#,
        )
        .expect("valid settings");

        let overrides = config.overrides();
        assert_eq!(overrides.start, Some(date(2024, 1, 10)));
        assert_eq!(overrides.end, None);
        assert_eq!(overrides.weekday_format, Some(WeekdayFormat::OneChar));
        assert_eq!(overrides.locale.language.as_deref(), Some("en-US"));
        assert_eq!(overrides.locale.next_month_label.as_deref(), Some("Forward"));
        assert_eq!(overrides.locale.week_column_label, None);
    }

    #[test]
    fn default_config_serializes_to_empty_document() {
        let text = toml::to_string_pretty(&Config::default()).expect("serializes");
        assert!(text.trim().is_empty());
    }
}

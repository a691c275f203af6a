// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDate;
use std::fmt;

use crate::domain::calendar::ParseOptionError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The resolved range ends before it starts.
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Date text that is not a valid `YYYY-MM-DD` (or `YYYY-MM`) value.
    InvalidDate(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::InvalidRange { .. } => "error-invalid-range",
            Error::InvalidDate(_) => "error-invalid-date",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidRange { start, end } => {
                write!(f, "Range Error: start {} is after end {}", start, end)
            }
            Error::InvalidDate(e) => write!(f, "Date Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ParseOptionError> for Error {
    fn from(err: ParseOptionError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::InvalidDate(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: MPL-2.0
//! Calendar domain types.
//!
//! This module contains calendar value objects that are independent
//! of any date library or presentation framework.

pub mod types;

// Re-export commonly used types
pub use types::{CalendarType, Direction, ParseOptionError, WeekdayFormat};

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability
//! and architectural purity.
//!
//! # Modules
//!
//! - [`calendar`]: Picker option enums ([`CalendarType`](calendar::CalendarType),
//!   [`WeekdayFormat`](calendar::WeekdayFormat), [`Direction`](calendar::Direction))

pub mod calendar;

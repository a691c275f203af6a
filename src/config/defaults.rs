// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Built-in locale used when nothing else resolves
//! - **Range**: Default selectable range
//! - **Grid**: Week count bounds of a month grid
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Built-in locale tag. Its catalog must exist under `assets/i18n/`.
pub const DEFAULT_LOCALE: &str = "sv";

// ==========================================================================
// Range Defaults
// ==========================================================================

/// Length of the default selectable range, counted from today.
pub const DEFAULT_RANGE_YEARS: u32 = 5;

// ==========================================================================
// Grid Bounds
// ==========================================================================

/// Fewest week rows a month grid can have (a 28-day February starting on
/// the first weekday).
pub const MIN_GRID_WEEKS: usize = 4;

/// Most week rows a month grid can have.
pub const MAX_GRID_WEEKS: usize = 6;

/// Days per week row.
pub const DAYS_PER_WEEK: usize = 7;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept by the diagnostics buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 50;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_RANGE_YEARS > 0);

    assert!(MIN_GRID_WEEKS > 0);
    assert!(MAX_GRID_WEEKS >= MIN_GRID_WEEKS);
    assert!(DAYS_PER_WEEK == 7);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

// SPDX-License-Identifier: MPL-2.0
//! Non-visual calendar logic.
//!
//! # Modules
//!
//! - [`dates`]: month/week boundaries, month stepping, week numbers
//! - [`bounds`]: which days, months and years are selectable
//! - [`grid`]: the week-by-week month grid
//! - [`selectors`]: year and month selector options
//! - [`range`]: the validated [`DateRange`]

pub mod bounds;
pub mod dates;
pub mod grid;
pub mod range;
pub mod selectors;

pub use bounds::{can_step_month, is_day_selectable, is_month_reachable, is_year_reachable};
pub use grid::{CalendarGrid, DayCell, Highlights, WeekRow};
pub use range::DateRange;
pub use selectors::{selectable_months, selectable_years, MonthOption};

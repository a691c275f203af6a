// SPDX-License-Identifier: MPL-2.0
//! Inclusive selectable date range.

use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

use super::bounds;
use crate::error::{Error, Result};

/// Inclusive `[start, end]` date range, guaranteed to satisfy `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` lies within the range.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        bounds::is_day_selectable(date, self.start, self.end)
    }

    /// Returns true if any day of the month of `anchor` lies within the range.
    #[must_use]
    pub fn contains_month(self, anchor: NaiveDate) -> bool {
        bounds::is_month_reachable(anchor, self.start, self.end)
    }

    /// Calendar years touched by the range.
    #[must_use]
    pub fn years(self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// Clamps `date` into the range.
    #[must_use]
    pub fn clamp(self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }
}

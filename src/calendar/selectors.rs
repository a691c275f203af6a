// SPDX-License-Identifier: MPL-2.0
//! Options for the year and month selectors.

use chrono::{Datelike, NaiveDate};

use super::bounds;
use crate::i18n::{format, LocaleData};

/// One entry of the month selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    /// 0-based month (`0` = January).
    pub month_index: u32,
    /// The month has no selectable day.
    pub disabled: bool,
    /// Full month name in the picker's locale.
    pub label: String,
}

/// Years touched by `[start, end]`, ascending.
///
/// Yields a single year when both bounds fall in the same year and nothing
/// when `start` is after `end`.
#[must_use]
pub fn selectable_years(start: NaiveDate, end: NaiveDate) -> Vec<i32> {
    (start.year()..=end.year()).collect()
}

/// The twelve months of `reference_year`, each flagged by whether it
/// overlaps `[start, end]`.
#[must_use]
pub fn selectable_months(
    reference_year: i32,
    start: NaiveDate,
    end: NaiveDate,
    locale: &LocaleData,
) -> Vec<MonthOption> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(reference_year, month, 1))
        .map(|anchor| MonthOption {
            month_index: anchor.month0(),
            disabled: !bounds::is_month_reachable(anchor, start, end),
            label: format::month_name(anchor, locale),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_year_range_yields_one_year() {
        assert_eq!(selectable_years(date(2024, 3, 1), date(2024, 11, 1)), vec![2024]);
    }

    #[test]
    fn multi_year_range_lists_every_year() {
        assert_eq!(
            selectable_years(date(2023, 12, 31), date(2026, 1, 1)),
            vec![2023, 2024, 2025, 2026]
        );
    }

    #[test]
    fn reversed_range_yields_no_years() {
        assert!(selectable_years(date(2025, 1, 1), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn months_outside_range_are_disabled() {
        let locale = LocaleData::resolve(Some("sv")).data;
        let months = selectable_months(2024, date(2024, 3, 15), date(2024, 11, 1), &locale);
        assert_eq!(months.len(), 12);
        let enabled: Vec<u32> = months
            .iter()
            .filter(|m| !m.disabled)
            .map(|m| m.month_index)
            .collect();
        assert_eq!(enabled, (2..=10).collect::<Vec<u32>>());
        assert_eq!(months[0].label, "januari");
        assert_eq!(months[11].label, "december");
    }

    #[test]
    fn months_are_relative_to_reference_year() {
        let locale = LocaleData::resolve(Some("en-US")).data;
        let months = selectable_months(2025, date(2024, 6, 1), date(2025, 2, 10), &locale);
        let enabled: Vec<&str> = months
            .iter()
            .filter(|m| !m.disabled)
            .map(|m| m.label.as_str())
            .collect();
        assert_eq!(enabled, vec!["January", "February"]);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for calendar grid operations.
//!
//! Measures the performance of:
//! - Building a single month grid
//! - Building every month of a multi-year range
//! - Month stepping through the picker (range check + reducer)

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use datepicker::calendar::{dates, grid, Highlights};
use datepicker::domain::calendar::Direction;
use datepicker::i18n::LocaleData;
use datepicker::options::OptionOverrides;
use datepicker::picker::{DatePicker, FixedClock};
use std::hint::black_box;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn highlights() -> Highlights {
    Highlights {
        today: date(2024, 2, 10),
        active: Some(date(2024, 2, 14)),
    }
}

/// Benchmark building one month grid.
fn bench_build_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_building");
    let locale = LocaleData::resolve(Some("sv")).data;

    group.bench_function("build_month", |b| {
        b.iter(|| {
            black_box(grid::build(
                black_box(date(2024, 2, 15)),
                &locale,
                date(2024, 1, 1),
                date(2029, 1, 1),
                highlights(),
            ));
        });
    });

    group.finish();
}

/// Benchmark building every month of a five-year range.
fn bench_build_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_building");
    let locale = LocaleData::resolve(Some("en-US")).data;
    let (start, end) = (date(2024, 1, 1), date(2028, 12, 31));

    group.bench_function("build_five_years", |b| {
        b.iter(|| {
            let mut month = start;
            while month <= end {
                black_box(grid::build(month, &locale, start, end, highlights()));
                month = dates::add_months(month, 1).unwrap();
            }
        });
    });

    group.finish();
}

/// Benchmark month navigation through the picker.
fn bench_step_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_building");
    let overrides = OptionOverrides {
        start: Some(date(2024, 1, 1)),
        end: Some(date(2028, 12, 31)),
        ..OptionOverrides::default()
    };

    group.bench_function("step_through_range", |b| {
        b.iter(|| {
            let mut picker =
                DatePicker::initialize_with_clock(&overrides, FixedClock(date(2024, 1, 1)))
                    .unwrap();
            while picker.step_month(Direction::Next) {}
            black_box(picker.display_date());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_month,
    bench_build_range,
    bench_step_month
);
criterion_main!(benches);

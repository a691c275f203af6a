// SPDX-License-Identifier: MPL-2.0
//! `datepicker` is the non-visual core of an embeddable date picker.
//!
//! It resolves picker options over sensible defaults, answers which days,
//! months and years are selectable, builds week-by-week month grids with
//! week numbers, and drives navigation through a small state machine. All
//! user-visible text comes from embedded Fluent catalogs.
//!
//! Rendering is left to the embedder: [`picker::DatePicker`] hands out plain
//! snapshots (grid, header, controls) and reports new selections through a
//! change callback.

#![doc(html_root_url = "https://docs.rs/datepicker/0.3.0")]

pub mod calendar;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod options;
pub mod picker;
pub mod state;

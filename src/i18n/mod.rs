// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Calendar names, navigation labels and the first day of the week all come from
//! embedded `.ftl` catalogs.
//!
//! # Features
//!
//! - Locale resolution from an explicit request, the settings file or the OS
//! - Primary-language matching (`sv-SE` uses the `sv` catalog)
//! - Fallback to the default locale when a catalog or key is missing
//! - Pure formatting helpers for weekday, month and day labels

pub mod fluent;
pub mod format;
pub mod locale;

pub use fluent::{detect_system_language, I18n};
pub use format::{day_number_label, month_name, weekday_name, weekday_names};
pub use locale::{CalendarLocale, LocaleData, LocaleResolution};

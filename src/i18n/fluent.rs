// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

use crate::config::DEFAULT_LOCALE;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Embedded Fluent catalogs with a current locale.
///
/// Lookups fall back from the current locale to the built-in default locale,
/// so a partially translated catalog never produces an empty label.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads all embedded catalogs and picks the current locale.
    ///
    /// Resolution order: the explicitly requested language, then the language
    /// from the settings file, then the built-in default. Each candidate
    /// matches exactly first and then by primary language (`sv-SE` → `sv`).
    pub fn new(requested: Option<&str>, settings_language: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            // Keep whatever entries parsed; broken ones fall back to the default locale.
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, _)| partial);
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            // Duplicate message ids keep their first definition.
            let _ = bundle.add_resource(resource);
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale = default_locale();
        let current_locale = resolve_locale(requested, settings_language, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches to `locale` if a catalog exists for it. Returns whether it switched.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    /// Returns the best available locale for `language`, if any.
    #[must_use]
    pub fn match_locale(&self, language: &str) -> Option<LanguageIdentifier> {
        match_available(language, &self.available_locales)
    }

    /// Translates `key` in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(&self.current_locale, key)
            .or_else(|| self.lookup(&self.default_locale, key))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn resolve_locale(
    requested: Option<&str>,
    settings_language: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Explicit request (options or CLI)
    if let Some(lang) = requested.and_then(|lang| match_available(lang, available)) {
        return Some(lang);
    }

    // 2. Settings file
    settings_language.and_then(|lang| match_available(lang, available))
}

fn match_available(
    language: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let wanted = language.trim().replace('_', "-").parse::<LanguageIdentifier>().ok()?;
    if available.contains(&wanted) {
        return Some(wanted);
    }
    available
        .iter()
        .find(|candidate| candidate.language == wanted.language)
        .cloned()
}

/// Returns the operating system's preferred language, if it has a catalog.
#[must_use]
pub fn detect_system_language() -> Option<String> {
    let os_locale = sys_locale::get_locale()?;
    let available: Vec<LanguageIdentifier> = Asset::iter()
        .filter_map(|file| file.strip_suffix(".ftl").and_then(|l| l.parse().ok()))
        .collect();
    match_available(&os_locale, &available).map(|lang| lang.to_string())
}

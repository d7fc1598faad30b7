// SPDX-License-Identifier: MPL-2.0
use crate::app::config::DEFAULT_LOCALE;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// String resolver used by every view.
///
/// Default resolution uses the locale negotiated from the system. Once the
/// lookup override is installed, a persisted language tag with a matching
/// bundle takes precedence.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    default_locale: LanguageIdentifier,
    preferred_locale: Option<LanguageIdentifier>,
    override_installed: bool,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("default_locale", &self.default_locale)
            .field("preferred_locale", &self.preferred_locale)
            .field("override_installed", &self.override_installed)
            .finish()
    }
}

impl I18n {
    /// Loads the embedded bundles and negotiates the default locale from
    /// `system_locale`.
    pub fn new(system_locale: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "skipping translation file with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(filename, ?errors, "translation file has syntax errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(filename, ?errors, "translation file has duplicate messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        let fallback: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let default_locale = system_locale
            .and_then(|requested| negotiate(requested, &available_locales))
            .unwrap_or(fallback);

        Self {
            bundles,
            available_locales,
            default_locale,
            preferred_locale: None,
            override_installed: false,
        }
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Redirects lookups through the persisted language tag.
    ///
    /// Returns `true` only for the call that actually installed it.
    pub fn install_override(&mut self) -> bool {
        if self.override_installed {
            return false;
        }
        self.override_installed = true;
        true
    }

    pub fn override_installed(&self) -> bool {
        self.override_installed
    }

    /// Records the persisted language tag consulted by the override.
    pub fn set_preferred_tag(&mut self, tag: Option<&str>) {
        self.preferred_locale = tag.and_then(|tag| tag.parse::<LanguageIdentifier>().ok());
    }

    /// The locale lookups currently resolve against.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        match &self.preferred_locale {
            Some(locale) if self.override_installed && self.bundles.contains_key(locale) => {
                locale
            }
            _ => &self.default_locale,
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(self.current_locale()) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                tracing::debug!(key, ?errors, "failed to format message");
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Picks the bundled locale closest to `requested`.
///
/// Accepts both `zh_TW` and `zh-TW` spellings. Chinese without an explicit
/// script picks Traditional for Taiwan, Hong Kong and Macau and Simplified
/// otherwise.
fn negotiate(requested: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let cleaned = requested.split(['.', '@']).next().unwrap_or(requested);
    let requested: LanguageIdentifier = cleaned.replace('_', "-").parse().ok()?;

    if available.contains(&requested) {
        return Some(requested);
    }

    let language = requested.language.as_str();
    let script = match (requested.script, requested.region) {
        (Some(script), _) => Some(script.as_str().to_string()),
        (None, Some(region)) if language == "zh" => match region.as_str() {
            "TW" | "HK" | "MO" => Some("Hant".to_string()),
            _ => Some("Hans".to_string()),
        },
        (None, None) if language == "zh" => Some("Hans".to_string()),
        _ => None,
    };

    available
        .iter()
        .find(|candidate| {
            candidate.language.as_str() == language
                && script.as_deref().is_none_or(|script| {
                    candidate.script.is_some_and(|s| s.as_str() == script)
                })
        })
        .cloned()
}

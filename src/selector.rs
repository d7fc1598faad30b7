// SPDX-License-Identifier: MPL-2.0
//! Applies a language choice: resolves the tag, persists it, points the
//! string resolver at it, and decides whether a restart prompt is due.
//!
//! The first [`LanguageSelector::apply`] of a selector is silent (the app
//! calls it at startup); every later call asks the user to restart.

use crate::app::config::{self, Config};
use crate::i18n::I18n;
use crate::language::{self, LanguageOption};
use crate::restart::RestartPrompt;
use std::path::PathBuf;

/// What a call to [`LanguageSelector::apply`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The tag now stored in the settings.
    pub tag: &'static str,
    /// Prompt to show before relaunching, if one is due.
    pub restart: Option<RestartPrompt>,
}

/// Owns the "language already switched in this process" flag.
#[derive(Debug, Default)]
pub struct LanguageSelector {
    config_dir: Option<PathBuf>,
    switched: bool,
}

impl LanguageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config_dir` instead of the resolved config directory.
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
            switched: false,
        }
    }

    /// Whether a language has been applied by this selector already.
    pub fn has_switched(&self) -> bool {
        self.switched
    }

    /// Applies `selection`, reading the system locale when following the system.
    pub fn apply(&mut self, selection: LanguageOption, i18n: &mut I18n) -> Applied {
        let system_locale = match selection {
            LanguageOption::FollowSystem => language::system_locale(),
            _ => None,
        };
        self.apply_with_locale(selection, system_locale.as_deref(), i18n)
    }

    /// Applies `selection` against an explicit system locale identifier.
    pub fn apply_with_locale(
        &mut self,
        selection: LanguageOption,
        system_locale: Option<&str>,
        i18n: &mut I18n,
    ) -> Applied {
        let tag = selection.language_tag(system_locale);
        tracing::info!(?selection, system_locale, tag, "applying language");

        self.persist(selection, tag);

        if i18n.install_override() {
            tracing::debug!("installed language lookup override");
        }
        i18n.set_preferred_tag(Some(tag));

        let restart = self.switched.then_some(RestartPrompt::LANGUAGE_CHANGED);
        self.switched = true;

        Applied { tag, restart }
    }

    fn persist(&self, selection: LanguageOption, tag: &str) {
        let (mut cfg, _) = config::load_with_override(self.config_dir.clone());
        cfg.general.language_option = Some(selection);
        cfg.general.set_language_tag(Some(tag));

        if let Err(error) = config::save_with_override(&cfg, self.config_dir.clone()) {
            tracing::warn!(%error, "failed to save language setting");
        }
    }

    /// Loads the current settings from this selector's config location.
    pub fn load_config(&self) -> (Config, Option<String>) {
        config::load_with_override(self.config_dir.clone())
    }
}

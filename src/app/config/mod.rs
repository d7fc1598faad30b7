// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Selected language option and the persisted language list
//! - `[restart]` - Relaunch policy
//!
//! The language list is stored under the `AppleLanguages` key as an ordered
//! list with a single tag, the shape platform localization fallback expects:
//!
//! ```toml
//! [general]
//! language_option = "simplified-chinese"
//! AppleLanguages = ["zh-Hans"]
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use langswitch::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.set_language_tag(Some("zh-Hant"));
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::language::LanguageOption;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Last option picked in the language selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_option: Option<LanguageOption>,

    /// Preferred language tags, most preferred first.
    #[serde(
        rename = "AppleLanguages",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub languages: Option<Vec<String>>,
}

impl GeneralConfig {
    /// The most preferred persisted tag, if any.
    pub fn language_tag(&self) -> Option<&str> {
        self.languages
            .as_ref()
            .and_then(|languages| languages.first())
            .map(String::as_str)
    }

    /// Stores `tag` as the sole preferred language, or removes the list.
    pub fn set_language_tag(&mut self, tag: Option<&str>) {
        self.languages = tag.map(|tag| vec![tag.to_string()]);
    }
}

/// Relaunch policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestartConfig {
    /// Exit the running process even if the replacement could not be spawned.
    #[serde(default = "default_exit_on_spawn_failure")]
    pub exit_on_spawn_failure: bool,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            exit_on_spawn_failure: DEFAULT_EXIT_ON_SPAWN_FAILURE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub restart: RestartConfig,
}

fn default_exit_on_spawn_failure() -> bool {
    DEFAULT_EXIT_ON_SPAWN_FAILURE
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// The file is flushed to disk before returning, so a process spawned right
/// after sees the new settings.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

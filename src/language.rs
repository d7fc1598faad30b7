// SPDX-License-Identifier: MPL-2.0
//! Selectable UI languages and the mapping from system locale to language tag.
//!
//! The set of options is closed: the user either follows the system region
//! or picks one of the three bundled languages. Every option resolves to one
//! of [`TAG_ENGLISH`], [`TAG_SIMPLIFIED_CHINESE`] or [`TAG_TRADITIONAL_CHINESE`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TAG_ENGLISH: &str = "en";
pub const TAG_SIMPLIFIED_CHINESE: &str = "zh-Hans";
pub const TAG_TRADITIONAL_CHINESE: &str = "zh-Hant";

/// Region tokens that select Traditional Chinese, in precedence order.
const TRADITIONAL_REGIONS: [&str; 6] = ["rg=hkzzzz", "rg=twzzzz", "rg=mozzzz", "TW", "HK", "MO"];

/// Region tokens that select Simplified Chinese.
const SIMPLIFIED_REGIONS: [&str; 1] = ["CN"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageOption {
    #[default]
    FollowSystem,
    English,
    SimplifiedChinese,
    TraditionalChinese,
}

impl LanguageOption {
    pub const ALL: [LanguageOption; 4] = [
        LanguageOption::FollowSystem,
        LanguageOption::English,
        LanguageOption::SimplifiedChinese,
        LanguageOption::TraditionalChinese,
    ];

    /// Fixed English label, also shown when no translation is available.
    pub fn label(self) -> &'static str {
        match self {
            LanguageOption::FollowSystem => "Follow System",
            LanguageOption::English => "English",
            LanguageOption::SimplifiedChinese => "Simplified Chinese",
            LanguageOption::TraditionalChinese => "Traditional Chinese",
        }
    }

    /// Returns the i18n message key for the option's label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            LanguageOption::FollowSystem => "language-follow-system",
            LanguageOption::English => "language-english",
            LanguageOption::SimplifiedChinese => "language-simplified-chinese",
            LanguageOption::TraditionalChinese => "language-traditional-chinese",
        }
    }

    /// Resolves the option to a concrete language tag.
    ///
    /// Only [`LanguageOption::FollowSystem`] looks at `system_locale`; the
    /// other options map to a fixed tag.
    pub fn language_tag(self, system_locale: Option<&str>) -> &'static str {
        match self {
            LanguageOption::FollowSystem => {
                tag_for_region(system_locale.and_then(region_token))
            }
            LanguageOption::English => TAG_ENGLISH,
            LanguageOption::SimplifiedChinese => TAG_SIMPLIFIED_CHINESE,
            LanguageOption::TraditionalChinese => TAG_TRADITIONAL_CHINESE,
        }
    }
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LanguageOption {
    type Err = String;

    /// Accepts the kebab-case id, the English label or a language tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let option = match trimmed.to_lowercase().replace(['_', ' '], "-").as_str() {
            "follow-system" | "system" => LanguageOption::FollowSystem,
            "english" | "en" => LanguageOption::English,
            "simplified-chinese" | "zh-hans" => LanguageOption::SimplifiedChinese,
            "traditional-chinese" | "zh-hant" => LanguageOption::TraditionalChinese,
            _ => return Err(format!("unknown language option: {}", trimmed)),
        };
        Ok(option)
    }
}

/// Extracts the trailing region token of a locale identifier.
///
/// Takes what follows the last `@`, then what follows the last `_` or `-`,
/// so `zh_CN`, `en_US@rg=twzzzz` and `zh-Hant-TW` yield `CN`, `rg=twzzzz`
/// and `TW`. A POSIX codeset suffix (`.UTF-8`) is ignored, including when
/// it precedes the modifier as in `en_US.UTF-8@rg=twzzzz`.
pub fn region_token(locale: &str) -> Option<&str> {
    let tail = locale.rsplit('@').next()?;
    let tail = tail.split('.').next().unwrap_or(tail);
    let token = tail.rsplit(['_', '-']).next()?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Maps a region token to a language tag. First match wins; anything
/// unrecognized, including no token at all, falls back to English.
pub fn tag_for_region(token: Option<&str>) -> &'static str {
    match token {
        Some(token) if TRADITIONAL_REGIONS.contains(&token) => TAG_TRADITIONAL_CHINESE,
        Some(token) if SIMPLIFIED_REGIONS.contains(&token) => TAG_SIMPLIFIED_CHINESE,
        _ => TAG_ENGLISH,
    }
}

/// Reads the locale identifier reported by the operating system.
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}

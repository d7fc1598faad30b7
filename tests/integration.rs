// SPDX-License-Identifier: MPL-2.0
use langswitch::app::config;
use langswitch::i18n::I18n;
use langswitch::language::LanguageOption;
use langswitch::restart::RestartPrompt;
use langswitch::selector::LanguageSelector;
use tempfile::tempdir;

#[test]
fn follow_system_then_english_scenario() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut selector = LanguageSelector::with_config_dir(dir.path().to_path_buf());
    let mut i18n = I18n::new(Some("zh_CN"));

    // Fresh process, mainland region: silent switch to Simplified Chinese.
    let first = selector.apply_with_locale(LanguageOption::FollowSystem, Some("zh_CN"), &mut i18n);
    assert_eq!(first.tag, "zh-Hans");
    assert!(first.restart.is_none());

    let (cfg, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(cfg.general.languages, Some(vec!["zh-Hans".to_string()]));

    // Same process, explicit English: persisted and a restart is requested.
    let second = selector.apply(LanguageOption::English, &mut i18n);
    assert_eq!(second.tag, "en");
    assert_eq!(second.restart, Some(RestartPrompt::LANGUAGE_CHANGED));

    let (cfg, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(cfg.general.language_tag(), Some("en"));
    assert_eq!(cfg.general.language_option, Some(LanguageOption::English));

    // The resolver already answers in the new language.
    assert_eq!(
        second.restart.map(|prompt| prompt.action(&i18n)),
        Some("Restart".to_string())
    );
}

#[test]
fn persisted_tag_is_visible_to_a_fresh_selector() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut first_run = LanguageSelector::with_config_dir(dir.path().to_path_buf());
    let mut i18n = I18n::new(Some("en_US"));
    first_run.apply_with_locale(LanguageOption::TraditionalChinese, None, &mut i18n);

    // A relaunched process starts with a new selector: its first apply is silent again.
    let mut relaunched = LanguageSelector::with_config_dir(dir.path().to_path_buf());
    let (cfg, warning) = relaunched.load_config();
    assert!(warning.is_none());
    let selection = cfg.general.language_option.unwrap_or_default();
    assert_eq!(selection, LanguageOption::TraditionalChinese);

    let mut i18n = I18n::new(Some("en_US"));
    let applied = relaunched.apply_with_locale(selection, None, &mut i18n);
    assert!(applied.restart.is_none());
    assert_eq!(i18n.tr("settings-language-label"), "語言");
}

#[test]
fn regional_variants_all_follow_the_precedence_table() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut selector = LanguageSelector::with_config_dir(dir.path().to_path_buf());
    let mut i18n = I18n::new(None);

    for (locale, expected) in [
        ("en_US@rg=hkzzzz", "zh-Hant"),
        ("en_US@rg=twzzzz", "zh-Hant"),
        ("en_US@rg=mozzzz", "zh-Hant"),
        ("zh_TW", "zh-Hant"),
        ("zh_HK", "zh-Hant"),
        ("zh_MO", "zh-Hant"),
        ("zh_CN", "zh-Hans"),
        ("ja_JP", "en"),
        ("", "en"),
    ] {
        let applied =
            selector.apply_with_locale(LanguageOption::FollowSystem, Some(locale), &mut i18n);
        assert_eq!(applied.tag, expected, "locale {locale:?}");
    }
}

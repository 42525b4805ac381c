use super::*;
use pretty_assertions::assert_eq;

fn unix_config() -> PathsConfig {
    PathsConfig::new("scrib")
        .with_platform(Platform::Unix)
        .with_prefix("/opt/scrib")
        .with_app_dir("/opt/scrib/bin")
}

// === Locale ===

#[test]
fn locale_code_languages() {
    assert_eq!(locale_code("fr_FR.UTF-8"), "fr");
    assert_eq!(locale_code("de"), "de");
    assert_eq!(locale_code("EN_us"), "en");
    assert_eq!(locale_code("sr_RS@latin"), "sr");
}

#[test]
fn locale_code_chinese_countries() {
    assert_eq!(locale_code("zh_CN.UTF-8"), "zh_CN");
    assert_eq!(locale_code("zh_TW"), "zh_TW");
    assert_eq!(locale_code("zh-tw"), "zh_TW");
    assert_eq!(locale_code("zh_HK"), "zh");
}

#[test]
fn locale_code_unknown_language_is_empty() {
    assert_eq!(locale_code("C"), "");
    assert_eq!(locale_code("POSIX"), "");
    assert_eq!(locale_code("ja_JP.UTF-8"), "");
    assert_eq!(locale_code(""), "");
}

#[test]
fn system_locale_prefers_lc_all() {
    let paths = ResourcePaths::new(
        unix_config()
            .with_env("LANG", "de_DE.UTF-8")
            .with_env("LC_MESSAGES", "")
            .with_env("LC_ALL", "nl_NL"),
    );
    assert_eq!(paths.system_locale(), "nl");
}

#[test]
fn system_locale_skips_empty_vars() {
    let paths = ResourcePaths::new(
        unix_config()
            .with_env("LC_ALL", "")
            .with_env("LANG", "uk_UA.UTF-8"),
    );
    assert_eq!(paths.system_locale(), "uk");
}

#[test]
fn translation_file_uses_locale() {
    let paths = ResourcePaths::new(unix_config().with_env("LANG", "zh_CN.UTF-8"));
    assert_eq!(paths.translation_file(), "scrib-zh_CN");
    let none = ResourcePaths::new(unix_config());
    assert_eq!(none.translation_file(), "scrib-");
}

// === Directories ===

#[test]
fn unix_layout_uses_prefix() {
    let paths = ResourcePaths::new(unix_config());
    assert_eq!(paths.translations_dir(), Path::new("/opt/scrib/share/scrib/qm"));
    assert_eq!(paths.resources_dir(), Path::new("/opt/scrib/share/scrib/resources"));
}

#[test]
fn windows_layout_uses_app_dir() {
    let paths = ResourcePaths::new(unix_config().with_platform(Platform::Windows));
    assert_eq!(paths.translations_dir(), Path::new("/opt/scrib/bin/share/qm"));
    assert_eq!(paths.resources_dir(), Path::new("/opt/scrib/bin/share/resources"));
}

#[test]
fn macos_layout_uses_bundle_resources() {
    let paths = ResourcePaths::new(unix_config().with_platform(Platform::MacOs));
    assert_eq!(
        paths.translations_dir(),
        Path::new("/opt/scrib/bin/../Resources/locale")
    );
    assert_eq!(paths.resources_dir(), Path::new("/opt/scrib/bin/../Resources"));
}

#[test]
fn config_dir_prefers_xdg() {
    let paths = ResourcePaths::new(
        unix_config()
            .with_env("HOME", "/home/u")
            .with_env("XDG_CONFIG_HOME", "/xdg"),
    );
    assert_eq!(paths.config_dir(), Some(Path::new("/xdg/scrib")));
}

#[test]
fn config_dir_falls_back_to_home() {
    let paths = ResourcePaths::new(unix_config().with_env("HOME", "/home/u"));
    assert_eq!(paths.config_dir(), Some(Path::new("/home/u/.config/scrib")));
    assert_eq!(ResourcePaths::new(unix_config()).config_dir(), None);
}

// === Memoization ===

#[test]
fn answers_are_memoized() {
    let paths = ResourcePaths::new(unix_config().with_env("LANG", "fi_FI"));
    let first = paths.system_locale().as_ptr();
    let second = paths.system_locale().as_ptr();
    assert_eq!(first, second);
    let dir_a: *const Path = paths.resources_dir();
    let dir_b: *const Path = paths.resources_dir();
    assert_eq!(dir_a, dir_b);
}

//! Resource paths for the script console.
//!
//! [`ResourcePaths`] answers a small fixed set of questions (locale code,
//! translation directory and file, resource directory, config directory).
//! Each answer is computed on first use and memoized for the lifetime of
//! the value. There is no global instance: construct one at startup and
//! pass it to whoever needs it.
//!
//! All inputs (platform, install prefix, executable directory, environment)
//! come from a [`PathsConfig`], so tests can supply their own.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

/// Install prefix used on Unix-like platforms when none is configured.
pub const DEFAULT_PREFIX: &str = match option_env!("SCRIB_PREFIX") {
    Some(prefix) => prefix,
    None => "/usr/local",
};

/// Languages with shipped translations.
const LANGUAGES: &[&str] = &[
    "da", "de", "en", "fi", "fr", "nl", "no", "ru", "sr", "sv", "uk", "zh",
];

/// Countries whose code is appended to the language.
const COUNTRIES: &[&str] = &["CN", "TW"];

/// Environment variables consulted for the locale, in priority order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Directory layout family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// App bundle: resources live next to the executable's directory.
    MacOs,
    /// Resources live under the executable's directory.
    Windows,
    /// Resources live under the install prefix.
    Unix,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Inputs for path resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathsConfig {
    pub app_name: String,
    pub platform: Platform,
    pub prefix: PathBuf,
    /// Directory holding the running executable.
    pub app_dir: PathBuf,
    pub env: BTreeMap<String, String>,
}

impl PathsConfig {
    /// Config for the current platform with an empty environment.
    pub fn new(app_name: impl Into<String>) -> Self {
        PathsConfig {
            app_name: app_name.into(),
            platform: Platform::current(),
            prefix: PathBuf::from(DEFAULT_PREFIX),
            app_dir: PathBuf::from("."),
            env: BTreeMap::new(),
        }
    }

    /// Config read from the running process.
    pub fn from_process(app_name: impl Into<String>) -> Self {
        let app_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        PathsConfig {
            app_dir,
            env: std::env::vars().collect(),
            ..Self::new(app_name)
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_app_dir(mut self, app_dir: impl Into<PathBuf>) -> Self {
        self.app_dir = app_dir.into();
        self
    }

    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    fn var(&self, key: &str) -> Option<&str> {
        self.env
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Memoized path lookups.
#[derive(Debug)]
pub struct ResourcePaths {
    config: PathsConfig,
    locale: OnceCell<String>,
    translations_dir: OnceCell<PathBuf>,
    translation_file: OnceCell<String>,
    resources_dir: OnceCell<PathBuf>,
    config_dir: OnceCell<Option<PathBuf>>,
}

impl ResourcePaths {
    pub fn new(config: PathsConfig) -> Self {
        ResourcePaths {
            config,
            locale: OnceCell::new(),
            translations_dir: OnceCell::new(),
            translation_file: OnceCell::new(),
            resources_dir: OnceCell::new(),
            config_dir: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &PathsConfig {
        &self.config
    }

    /// Translation code for the environment locale, such as `fr` or `zh_TW`.
    ///
    /// Empty when the language has no translation.
    pub fn system_locale(&self) -> &str {
        self.locale.get_or_init(|| {
            let raw = LOCALE_VARS
                .iter()
                .find_map(|key| self.config.var(key))
                .unwrap_or_default();
            let code = locale_code(raw);
            tracing::debug!(raw, code = %code, "resolved system locale");
            code
        })
    }

    /// Directory holding compiled translations.
    pub fn translations_dir(&self) -> &Path {
        self.translations_dir.get_or_init(|| {
            let config = &self.config;
            match config.platform {
                Platform::MacOs => config.app_dir.join("..").join("Resources").join("locale"),
                Platform::Windows => config.app_dir.join("share").join("qm"),
                Platform::Unix => config
                    .prefix
                    .join("share")
                    .join(&config.app_name)
                    .join("qm"),
            }
        })
    }

    /// Base name of the translation for [`system_locale`](Self::system_locale).
    pub fn translation_file(&self) -> &str {
        self.translation_file
            .get_or_init(|| format!("{}-{}", self.config.app_name, self.system_locale()))
    }

    /// Directory holding bundled resources.
    pub fn resources_dir(&self) -> &Path {
        self.resources_dir.get_or_init(|| {
            let config = &self.config;
            match config.platform {
                Platform::MacOs => config.app_dir.join("..").join("Resources"),
                Platform::Windows => config.app_dir.join("share").join("resources"),
                Platform::Unix => config
                    .prefix
                    .join("share")
                    .join(&config.app_name)
                    .join("resources"),
            }
        })
    }

    /// Per-user config directory, if the environment names a home.
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir
            .get_or_init(|| {
                let config = &self.config;
                let base = match config.var("XDG_CONFIG_HOME") {
                    Some(xdg) => PathBuf::from(xdg),
                    None => PathBuf::from(config.var("HOME")?).join(".config"),
                };
                Some(base.join(&config.app_name))
            })
            .as_deref()
    }
}

/// Reduce a POSIX locale name (`zh_TW.UTF-8@euro`) to a translation code.
fn locale_code(raw: &str) -> String {
    let name = raw.split(['.', '@']).next().unwrap_or_default();
    let mut parts = name.split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    if !LANGUAGES.contains(&language.as_str()) {
        return String::new();
    }
    let country = parts.next().unwrap_or_default().to_ascii_uppercase();
    if COUNTRIES.contains(&country.as_str()) {
        format!("{language}_{country}")
    } else {
        language
    }
}

#[cfg(test)]
mod tests;

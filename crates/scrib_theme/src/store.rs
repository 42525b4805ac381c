//! Loading and saving the color scheme.
//!
//! The scheme is stored as a small JSON object keyed by `error`, `comment`,
//! `keyword`, `sign`, `number`, `string` and `text`. A missing file is not
//! an error: the defaults are used and written back on the next save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scheme::ColorScheme;

/// Default file name of a persisted scheme inside a config directory.
pub const THEME_FILE_NAME: &str = "theme.json";

/// Error loading or saving a scheme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("cannot read theme file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write theme file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed theme file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode theme: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Location of a persisted [`ColorScheme`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ThemeStore { path: path.into() }
    }

    /// Store at [`THEME_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(THEME_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the scheme, or the defaults if nothing was saved yet.
    pub fn load(&self) -> Result<ColorScheme, ThemeError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved theme, using defaults");
                return Ok(ColorScheme::default());
            }
            Err(source) => {
                return Err(ThemeError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| ThemeError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load the scheme, falling back to the defaults on any error.
    pub fn load_or_default(&self) -> ColorScheme {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("{e}; using default theme");
            ColorScheme::default()
        })
    }

    /// Write the scheme, creating the parent directory if needed.
    pub fn save(&self, scheme: &ColorScheme) -> Result<(), ThemeError> {
        let write_error = |source| ThemeError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }
        let mut json = serde_json::to_string_pretty(scheme)?;
        json.push('\n');
        fs::write(&self.path, json).map_err(write_error)?;
        tracing::debug!(path = %self.path.display(), "saved theme");
        Ok(())
    }
}

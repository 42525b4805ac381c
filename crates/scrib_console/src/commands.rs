//! Implementations of the `scrib` subcommands.
//!
//! Each function returns the text to print so the binary stays a thin
//! dispatcher and the commands can be tested without a terminal.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use scrib_highlight::{Document, Highlighter, RuleTable};
use scrib_paths::ResourcePaths;
use scrib_theme::{ColorScheme, ThemeError, ThemeStore};

use crate::console::ScriptConsole;
use crate::render::{render_ansi, render_spans};
use crate::runner::{RunError, ScriptRunner};

/// Failure of a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("no config directory: set HOME or XDG_CONFIG_HOME, or pass --theme")]
    NoConfigDir,
}

fn read_source(path: &Path) -> Result<String, CommandError> {
    fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Theme location: `explicit` if given, else the config directory.
pub fn theme_store(
    paths: &ResourcePaths,
    explicit: Option<&Path>,
) -> Result<ThemeStore, CommandError> {
    match explicit {
        Some(path) => Ok(ThemeStore::new(path)),
        None => paths
            .config_dir()
            .map(ThemeStore::in_dir)
            .ok_or(CommandError::NoConfigDir),
    }
}

/// Highlight files in parallel and render them in input order.
///
/// With `spans`, the final runs of each block are listed instead of the
/// colored text. Multiple files get a `==> name <==` header each.
#[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn highlight_files(
    files: &[PathBuf],
    scheme: &ColorScheme,
    spans: bool,
) -> Result<String, CommandError> {
    let rules = Arc::new(RuleTable::new());
    let rendered: Vec<String> = files
        .par_iter()
        .map(|path| -> Result<String, CommandError> {
            let text = read_source(path)?;
            let highlighter = Highlighter::with_rules(Arc::clone(&rules));
            let doc = Document::from_text(highlighter, &text);
            tracing::debug!(path = %path.display(), blocks = doc.len(), "highlighted");
            Ok(if spans {
                render_spans(&doc)
            } else {
                render_ansi(&doc, scheme)
            })
        })
        .collect::<Result<_, CommandError>>()?;

    if let [only] = rendered.as_slice() {
        return Ok(only.clone());
    }
    let mut out = String::new();
    for (path, body) in files.iter().zip(&rendered) {
        let _ = writeln!(out, "==> {} <==", path.display());
        out.push_str(body);
    }
    Ok(out)
}

/// Load `file` into a fresh console and execute it once.
#[tracing::instrument(level = "debug", skip(runner))]
pub fn run_script<R: ScriptRunner>(
    file: &Path,
    runner: R,
) -> Result<ScriptConsole<R>, CommandError> {
    let text = read_source(file)?;
    let mut console = ScriptConsole::new(Highlighter::new(), runner);
    console.set_script(&text);
    console.exec()?;
    Ok(console)
}

/// Print the scheme as `key = #rrggbb` lines, or reset it to the defaults.
pub fn theme(store: &ThemeStore, reset: bool) -> Result<String, CommandError> {
    let scheme = if reset {
        let scheme = ColorScheme::default();
        store.save(&scheme)?;
        scheme
    } else {
        store.load()?
    };
    let entries = [
        ("error", scheme.error),
        ("comment", scheme.comment),
        ("keyword", scheme.keyword),
        ("sign", scheme.sign),
        ("number", scheme.number),
        ("string", scheme.string),
        ("text", scheme.text),
    ];
    let mut out = format!("# {}\n", store.path().display());
    for (key, color) in entries {
        let _ = writeln!(out, "{key} = {color}");
    }
    Ok(out)
}

/// Describe every resolved resource path.
pub fn describe_paths(paths: &ResourcePaths) -> String {
    let config_dir = paths
        .config_dir()
        .map_or_else(|| "(none)".to_owned(), |dir| dir.display().to_string());
    format!(
        "locale = {}\ntranslations = {}\ntranslation file = {}\nresources = {}\nconfig = {}\n",
        paths.system_locale(),
        paths.translations_dir().display(),
        paths.translation_file(),
        paths.resources_dir().display(),
        config_dir,
    )
}

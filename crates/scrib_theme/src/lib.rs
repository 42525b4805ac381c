//! Scrib Theme
//!
//! Maps highlighter [`StyleTag`](scrib_highlight::StyleTag)s to concrete text
//! formats, and persists the mapping between sessions.
//!
//! The highlighter never reads this mapping: it only emits tags. Hosts load
//! a [`ColorScheme`] at startup through a [`ThemeStore`], resolve tags with
//! [`ColorScheme::format`], and write the scheme back at shutdown.

pub mod color;
pub mod scheme;
pub mod store;

pub use color::{ColorError, Rgb};
pub use scheme::{ColorScheme, FontStyle, TextFormat};
pub use store::{ThemeError, ThemeStore, THEME_FILE_NAME};

//! Script console for the embedded editor.
//!
//! [`ScriptConsole`] pairs a highlighted input [`Document`] with a
//! [`ScriptRunner`] and accumulates what the runner prints. The `scrib`
//! binary drives it from the command line and renders highlighted files to
//! the terminal.
//!
//! [`Document`]: scrib_highlight::Document

pub mod commands;
pub mod console;
pub mod logging;
pub mod render;
pub mod runner;

pub use commands::CommandError;
pub use console::ScriptConsole;
pub use logging::init_tracing;
pub use render::{render_ansi, render_spans};
pub use runner::{ProcessRunner, RunError, ScriptOutput, ScriptRunner};

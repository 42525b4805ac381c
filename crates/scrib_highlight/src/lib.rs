//! Scrib Highlighter
//!
//! Incremental syntax highlighting for the script console editor.
//!
//! # Architecture
//!
//! Text is highlighted one block (line) at a time:
//!
//! 1. **Scan**: [`BlockScanner`] applies every rule of the [`RuleTable`] to the
//!    block in table order. Spans from different rules may overlap.
//! 2. **Track**: [`track_triple_quotes`] finds `"""` strings, which may stay
//!    open across blocks, and emits spans that override the scan.
//!
//! The only state carried between blocks is a [`ContinuationState`]. It is
//! passed in and returned explicitly, so a block's highlighting is a pure
//! function of `(text, entry state)`. [`Document`] owns the chain of states
//! for one buffer and re-highlights only the blocks an edit can affect.
//!
//! # Modules
//!
//! - [`style`]: style tags, spans and continuation state
//! - [`rules`]: the declarative rule table
//! - [`scanner`]: per-block rule application
//! - [`continuation`]: cross-block triple-quoted strings
//! - [`highlighter`]: scan + track for one block, span resolution
//! - [`document`]: block chain and incremental re-highlighting

pub mod continuation;
pub mod document;
pub mod highlighter;
pub mod rules;
pub mod scanner;
pub mod style;

pub use continuation::{track_triple_quotes, TRIPLE_QUOTE};
pub use document::{Block, DirtyRange, Document, DocumentError};
pub use highlighter::{BlockHighlight, Highlighter};
pub use rules::{Rule, RuleTable, KEYWORDS};
pub use scanner::BlockScanner;
pub use style::{ContinuationState, Span, StyleTag};

//! Cross-block triple-quoted strings.
//!
//! A `"""` string may open in one block and close any number of blocks
//! later. The tracker runs after the [`BlockScanner`](crate::BlockScanner)
//! so its spans override anything the scanner styled inside the string.
//!
//! # Marker search
//!
//! Every search for a marker starts at or after the end of the previous
//! marker, so the three quotes of one marker are never reused by the next
//! search. `""""""` is one empty string, while `""""` opens a string that
//! stays open with a single quote of content.

use memchr::memmem;

use crate::style::{ContinuationState, Span, StyleTag};

/// Delimiter that opens and closes a multi-block string.
pub const TRIPLE_QUOTE: &str = "\"\"\"";

const MARKER_LEN: usize = TRIPLE_QUOTE.len();

/// Find the next triple-quote marker at or after `from`.
fn find_marker(bytes: &[u8], from: usize) -> Option<usize> {
    let haystack = bytes.get(from..)?;
    memmem::find(haystack, TRIPLE_QUOTE.as_bytes()).map(|offset| from + offset)
}

/// Detect triple-quoted strings in one block.
///
/// Returns the string spans, in order, and the block's exit state. When
/// `entry` says a string is already open, the block starts inside it.
pub fn track_triple_quotes(
    text: &str,
    entry: ContinuationState,
) -> (Vec<Span>, ContinuationState) {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut spans = Vec::new();
    let mut cursor = 0;

    if entry.is_inside_string() {
        let Some(close) = find_marker(bytes, 0) else {
            if len > 0 {
                spans.push(Span::new(0, len, StyleTag::String));
            }
            return (spans, ContinuationState::InTripleQuotedString);
        };
        cursor = close + MARKER_LEN;
        spans.push(Span::new(0, cursor, StyleTag::String));
    }

    while let Some(open) = find_marker(bytes, cursor) {
        let Some(close) = find_marker(bytes, open + MARKER_LEN) else {
            spans.push(Span::new(open, len - open, StyleTag::String));
            return (spans, ContinuationState::InTripleQuotedString);
        };
        cursor = close + MARKER_LEN;
        spans.push(Span::new(open, cursor - open, StyleTag::String));
    }

    (spans, ContinuationState::Normal)
}

//! Property-based tests for the block highlighter.
//!
//! These use proptest to generate script-like blocks rich in the characters
//! the rules care about (quotes, `#`, digits, operators, keywords) and check:
//! 1. Purity: highlighting the same block twice gives the same result
//! 2. Override: the displayed style of a byte is the last span covering it
//! 3. Incrementality: editing blocks one at a time (including edits that
//!    introduce new lines) matches a full rescan
//! 4. Recovery: a rebuilt chain equals the incrementally maintained one

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use once_cell::sync::Lazy;
use proptest::prelude::*;
use proptest::sample::Index;
use scrib_highlight::{
    track_triple_quotes, ContinuationState, Document, Highlighter, RuleTable, Span, StyleTag,
};

/// Compiled once for the whole binary; every case shares it.
static RULES: Lazy<Arc<RuleTable>> = Lazy::new(|| Arc::new(RuleTable::new()));

fn highlighter() -> Highlighter {
    Highlighter::with_rules(Arc::clone(&RULES))
}

// -- Generation Strategies --

const FRAGMENTS: &[&str] = &[
    "\"\"\"", "\"", "'", "#", " ", "def", "If", "in", "format", "12", "a1", "<=", "!", "-",
    "é", "\\", "x", "print",
];

/// One piece of a block: either a lexically interesting fragment or filler.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(FRAGMENTS).prop_map(str::to_owned),
        1 => "[a-z0-9 ]{1,4}",
    ]
}

/// One block of text (never contains a newline).
fn block() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
}

fn entry_state() -> impl Strategy<Value = ContinuationState> {
    prop_oneof![
        Just(ContinuationState::Normal),
        Just(ContinuationState::InTripleQuotedString),
    ]
}

/// Reference painter: the style of a byte is the tag of the last span
/// covering it.
fn reference_style(spans: &[Span], offset: usize) -> Option<StyleTag> {
    spans
        .iter()
        .rev()
        .find(|span| span.start <= offset && offset < span.start + span.len)
        .map(|span| span.tag)
}

// -- Properties --

proptest! {
    #[test]
    fn highlighting_is_pure(text in block(), entry in entry_state()) {
        let highlighter = highlighter();
        prop_assert_eq!(highlighter.scan(&text), highlighter.scan(&text));
        prop_assert_eq!(
            highlighter.highlight_block(&text, entry),
            highlighter.highlight_block(&text, entry)
        );
    }

    #[test]
    fn later_spans_win(text in block(), entry in entry_state()) {
        let hl = highlighter().highlight_block(&text, entry);
        let styles = hl.styles();
        prop_assert_eq!(styles.len(), text.len());
        for (offset, style) in styles.iter().enumerate() {
            prop_assert_eq!(*style, reference_style(hl.spans(), offset));
        }
    }

    #[test]
    fn runs_are_ordered_disjoint_and_on_char_boundaries(
        text in block(),
        entry in entry_state(),
    ) {
        let runs = highlighter().highlight_block(&text, entry).runs();
        for pair in runs.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start);
        }
        for run in &runs {
            prop_assert!(!run.is_empty());
            prop_assert!(run.end() <= text.len());
            prop_assert!(text.is_char_boundary(run.start));
            prop_assert!(text.is_char_boundary(run.end()));
        }
    }

    #[test]
    fn string_spans_are_ordered_and_in_bounds(text in block(), entry in entry_state()) {
        let (spans, exit) = track_triple_quotes(&text, entry);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start);
        }
        for span in &spans {
            prop_assert_eq!(span.tag, StyleTag::String);
            prop_assert!(span.end() <= text.len());
        }
        // An open string at exit always runs to the end of the block.
        if exit.is_inside_string() && !text.is_empty() {
            prop_assert_eq!(spans.last().map(Span::end), Some(text.len()));
        }
    }

    #[test]
    fn incremental_edits_match_full_rescan(
        initial in prop::collection::vec(block(), 1..8),
        edits in prop::collection::vec((any::<Index>(), block()), 0..8),
    ) {
        let highlighter = highlighter();
        let mut doc = Document::from_text(highlighter.clone(), &initial.join("\n"));
        for (index, text) in edits {
            let index = index.index(doc.len());
            let dirty = doc.set_block(index, text).unwrap();
            prop_assert_eq!(dirty.start, index);
            prop_assert!(dirty.end > index);
        }
        let fresh = Document::from_text(highlighter, &doc.text());
        prop_assert_eq!(doc.blocks(), fresh.blocks());
        prop_assert!(doc.verify_chain());
    }

    #[test]
    fn multi_line_edits_match_full_rescan(
        initial in prop::collection::vec(block(), 1..6),
        at in any::<Index>(),
        lines in prop::collection::vec(block(), 1..4),
    ) {
        let highlighter = highlighter();
        let mut doc = Document::from_text(highlighter.clone(), &initial.join("\n"));
        let index = at.index(doc.len());
        let len_before = doc.len();
        doc.set_block(index, lines.join("\r\n")).unwrap();
        prop_assert_eq!(doc.len(), len_before + lines.len() - 1);
        let fresh = Document::from_text(highlighter, &doc.text());
        prop_assert_eq!(doc.blocks(), fresh.blocks());
        prop_assert!(doc.verify_chain());
    }

    #[test]
    fn splices_match_full_rescan(
        initial in prop::collection::vec(block(), 1..8),
        at in any::<Index>(),
        remove in 0usize..3,
        inserted in prop::collection::vec(block(), 0..4),
    ) {
        let highlighter = highlighter();
        let mut doc = Document::from_text(highlighter.clone(), &initial.join("\n"));
        let start = at.index(doc.len() + 1);
        let end = (start + remove).min(doc.len());
        doc.splice(start..end, inserted).unwrap();
        let fresh = Document::from_text(highlighter, &doc.text());
        prop_assert_eq!(doc.blocks(), fresh.blocks());
    }

    #[test]
    fn rehighlight_reproduces_chain(lines in prop::collection::vec(block(), 1..10)) {
        let mut doc = Document::from_text(highlighter(), &lines.join("\n"));
        let before = doc.blocks().to_vec();
        doc.rehighlight();
        prop_assert_eq!(doc.blocks(), before.as_slice());
    }
}

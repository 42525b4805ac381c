//! One-block highlighting and span resolution.

use std::sync::Arc;

use crate::continuation::track_triple_quotes;
use crate::rules::RuleTable;
use crate::scanner::BlockScanner;
use crate::style::{ContinuationState, Span, StyleTag};

/// Highlights single blocks against a shared rule table.
///
/// Cloning is cheap: clones share the same compiled [`RuleTable`], so one
/// table can serve any number of documents, on any number of threads.
#[derive(Clone, Debug)]
pub struct Highlighter {
    rules: Arc<RuleTable>,
}

impl Highlighter {
    /// Create a highlighter with a freshly compiled rule table.
    pub fn new() -> Self {
        Self::with_rules(Arc::new(RuleTable::new()))
    }

    /// Create a highlighter sharing an existing rule table.
    pub fn with_rules(rules: Arc<RuleTable>) -> Self {
        Highlighter { rules }
    }

    pub fn rules(&self) -> &Arc<RuleTable> {
        &self.rules
    }

    /// Apply the rule table only (no triple-quote tracking).
    pub fn scan(&self, text: &str) -> Vec<Span> {
        BlockScanner::new(&self.rules).scan(text)
    }

    /// Highlight one block given the previous block's exit state.
    ///
    /// Rule spans come first, then triple-quoted string spans, so string
    /// spans win wherever they overlap a rule span.
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len(), ?entry))]
    pub fn highlight_block(&self, text: &str, entry: ContinuationState) -> BlockHighlight {
        let mut spans = self.scan(text);
        let (strings, exit) = track_triple_quotes(text, entry);
        spans.extend(strings);
        BlockHighlight {
            spans,
            exit,
            len: text.len(),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlighting of one block: spans in application order plus exit state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockHighlight {
    spans: Vec<Span>,
    exit: ContinuationState,
    len: usize,
}

impl BlockHighlight {
    /// Spans in application order. Later spans override earlier ones.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// State to hand to the next block.
    pub fn exit(&self) -> ContinuationState {
        self.exit
    }

    /// Length of the highlighted block text in bytes.
    pub fn block_len(&self) -> usize {
        self.len
    }

    /// Paint spans in order onto a per-byte style map.
    pub fn styles(&self) -> Vec<Option<StyleTag>> {
        let mut styles = vec![None; self.len];
        for span in &self.spans {
            let end = span.end().min(self.len);
            if span.start < end {
                styles[span.start..end].fill(Some(span.tag));
            }
        }
        styles
    }

    /// Final display: ordered, non-overlapping, maximal styled runs.
    pub fn runs(&self) -> Vec<Span> {
        let mut runs: Vec<Span> = Vec::new();
        for (offset, style) in self.styles().into_iter().enumerate() {
            let Some(tag) = style else {
                continue;
            };
            match runs.last_mut() {
                Some(last) if last.tag == tag && last.end() == offset => last.len += 1,
                _ => runs.push(Span::new(offset, 1, tag)),
            }
        }
        runs
    }

    /// Displayed style of the byte at `offset`, if any.
    pub fn style_at(&self, offset: usize) -> Option<StyleTag> {
        if offset >= self.len {
            return None;
        }
        self.spans
            .iter()
            .rev()
            .find(|span| span.contains(offset))
            .map(|span| span.tag)
    }
}

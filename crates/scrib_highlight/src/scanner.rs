//! Per-block rule application.
//!
//! The scanner never looks outside the block it is given and never consults
//! continuation state. A quoted string left open at the end of a block is
//! left unstyled here; only `"""` strings get cross-block treatment (see
//! [`crate::continuation`]).

use crate::rules::RuleTable;
use crate::style::Span;

/// Applies a [`RuleTable`] to one block of text.
#[derive(Clone, Copy, Debug)]
pub struct BlockScanner<'r> {
    rules: &'r RuleTable,
}

impl<'r> BlockScanner<'r> {
    pub fn new(rules: &'r RuleTable) -> Self {
        BlockScanner { rules }
    }

    /// Scan one block and return its spans in application order.
    ///
    /// For each rule in table order, every non-overlapping match of that
    /// rule becomes one span; each search resumes at the end of the same
    /// rule's previous match. Spans of different rules may overlap and are
    /// not de-duplicated: the later span wins when the spans are painted.
    pub fn scan(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for rule in self.rules {
            let tag = rule.tag();
            spans.extend(
                rule.regex()
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(|m| Span::new(m.start(), m.len(), tag)),
            );
        }
        spans
    }
}

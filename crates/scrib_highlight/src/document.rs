//! Block chain and incremental re-highlighting.
//!
//! A [`Document`] owns the text of one editor buffer split into blocks,
//! together with each block's entry state and highlighting. Edits
//! re-highlight the edited blocks and then keep going forward only while
//! the next block's entry state changes: once a block receives the same
//! entry state it had before, its output (and everything after it) is
//! unchanged.
//!
//! # Recovery
//!
//! The stored chain is a cache. [`Document::rehighlight`] rebuilds it from
//! block 0 with [`ContinuationState::Normal`], and because highlighting is a
//! pure function of `(text, entry)` the rebuild is always identical to what
//! a correct chain holds. [`Document::verify_chain`] checks exactly that.

use std::ops::Range;

use crate::highlighter::{BlockHighlight, Highlighter};
use crate::style::ContinuationState;

/// Error returned by document edits.
///
/// An edit that fails leaves the document untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("block {index} is out of range for a document of {len} blocks")]
    BlockOutOfRange { index: usize, len: usize },
    #[error("block range {start}..{end} is invalid for a document of {len} blocks")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Blocks whose highlighting was recomputed by an edit.
///
/// Hosts repaint exactly `start..end`. An empty range means no block
/// needed repainting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtyRange {
    pub start: usize,
    pub end: usize,
}

impl DirtyRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// One line of the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    text: String,
    entry: ContinuationState,
    highlight: BlockHighlight,
}

impl Block {
    fn pending(text: String) -> Self {
        Block {
            text,
            entry: ContinuationState::Normal,
            highlight: BlockHighlight::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// State this block was highlighted with.
    pub fn entry(&self) -> ContinuationState {
        self.entry
    }

    pub fn highlight(&self) -> &BlockHighlight {
        &self.highlight
    }

    pub fn exit(&self) -> ContinuationState {
        self.highlight.exit()
    }
}

/// Split text into block texts on `\n`, dropping one trailing `\r` per block.
///
/// Always yields at least one block.
fn split_blocks(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
}

/// Block texts for one edited block: embedded separators become block
/// boundaries, exactly as [`Document::from_text`] would split them.
fn normalize_block(text: String) -> Vec<String> {
    if text.contains(['\n', '\r']) {
        split_blocks(&text).collect()
    } else {
        vec![text]
    }
}

/// Text of one editor buffer with its highlighting chain.
#[derive(Clone, Debug)]
pub struct Document {
    highlighter: Highlighter,
    blocks: Vec<Block>,
}

impl Document {
    /// Create a document holding one empty block.
    pub fn new(highlighter: Highlighter) -> Self {
        Self::from_text(highlighter, "")
    }

    /// Create a document from text and highlight every block.
    pub fn from_text(highlighter: Highlighter, text: &str) -> Self {
        let mut doc = Document {
            highlighter,
            blocks: Vec::new(),
        };
        doc.set_text(text);
        doc
    }

    /// Replace the whole text and re-highlight every block.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn set_text(&mut self, text: &str) -> DirtyRange {
        self.blocks = split_blocks(text).map(Block::pending).collect();
        self.rehighlight()
    }

    /// Replace the text of one block.
    ///
    /// A `\n` in `text` splits it into several blocks and a trailing `\r`
    /// is dropped, so `text()` and `from_text` still round-trip.
    #[tracing::instrument(level = "debug", skip(self, text))]
    pub fn set_block(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<DirtyRange, DocumentError> {
        let len = self.blocks.len();
        if index >= len {
            return Err(DocumentError::BlockOutOfRange { index, len });
        }
        self.splice(index..index + 1, [text.into()])
    }

    /// Replace the blocks in `range` with `blocks`.
    ///
    /// An empty range inserts; an empty iterator deletes. A document never
    /// becomes empty: deleting every block leaves one empty block. Texts
    /// are split on `\n` and stripped of a trailing `\r` like
    /// [`from_text`](Self::from_text).
    #[tracing::instrument(level = "debug", skip(self, blocks))]
    pub fn splice<I>(&mut self, range: Range<usize>, blocks: I) -> Result<DirtyRange, DocumentError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let len = self.blocks.len();
        if range.start > range.end || range.end > len {
            return Err(DocumentError::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }

        let start = range.start;
        let removed = range.len();
        let replacement = blocks
            .into_iter()
            .flat_map(|text| normalize_block(text.into()))
            .map(Block::pending);
        self.blocks.splice(range, replacement);
        if self.blocks.is_empty() {
            self.blocks.push(Block::pending(String::new()));
        }
        let inserted = self.blocks.len() + removed - len;
        Ok(self.propagate(start, start + inserted))
    }

    /// Insert one block before `index` (`index == len()` appends).
    pub fn insert_block(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<DirtyRange, DocumentError> {
        self.splice(index..index, [text.into()])
    }

    /// Remove the block at `index`.
    pub fn remove_block(&mut self, index: usize) -> Result<DirtyRange, DocumentError> {
        if index >= self.blocks.len() {
            return Err(DocumentError::BlockOutOfRange {
                index,
                len: self.blocks.len(),
            });
        }
        self.splice(index..index + 1, std::iter::empty::<String>())
    }

    /// Rebuild the whole chain from block 0.
    pub fn rehighlight(&mut self) -> DirtyRange {
        self.propagate(0, self.blocks.len())
    }

    /// Check that the stored chain matches a fresh rescan.
    pub fn verify_chain(&self) -> bool {
        let mut entry = ContinuationState::Normal;
        for block in &self.blocks {
            if block.entry != entry {
                return false;
            }
            let fresh = self.highlighter.highlight_block(&block.text, entry);
            if fresh != block.highlight {
                return false;
            }
            entry = fresh.exit();
        }
        true
    }

    /// Re-highlight blocks starting at `start`.
    ///
    /// Blocks in `start..force_end` are always rescanned. After that,
    /// rescanning continues only while a block's entry state differs from
    /// the one it was last highlighted with.
    fn propagate(&mut self, start: usize, force_end: usize) -> DirtyRange {
        let mut entry = match start.checked_sub(1) {
            Some(prev) => self.blocks[prev].exit(),
            None => ContinuationState::Normal,
        };
        let mut index = start;
        while index < self.blocks.len() {
            let block = &mut self.blocks[index];
            if index >= force_end && block.entry == entry {
                break;
            }
            block.entry = entry;
            block.highlight = self.highlighter.highlight_block(&block.text, entry);
            entry = block.highlight.exit();
            index += 1;
        }
        tracing::debug!(start, end = index, "re-highlighted blocks");
        DirtyRange { start, end: index }
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`: a document holds at least one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Exit state of the last block.
    pub fn exit_state(&self) -> ContinuationState {
        self.blocks
            .last()
            .map_or(ContinuationState::Normal, Block::exit)
    }

    /// Full text, blocks joined with `\n`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&block.text);
        }
        text
    }
}

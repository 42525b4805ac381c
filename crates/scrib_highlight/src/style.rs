//! Style tags, spans, and the state carried between blocks.

use std::fmt;

/// Semantic category of a highlighted span.
///
/// Carries no color. Hosts resolve a tag to a concrete format through their
/// own color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleTag {
    Keyword,
    Comment,
    String,
    Number,
    Operator,
}

impl StyleTag {
    /// All tags, in declaration order.
    pub const ALL: [StyleTag; 5] = [
        StyleTag::Keyword,
        StyleTag::Comment,
        StyleTag::String,
        StyleTag::Number,
        StyleTag::Operator,
    ];

    /// Lowercase name of the tag.
    pub const fn name(self) -> &'static str {
        match self {
            StyleTag::Keyword => "keyword",
            StyleTag::Comment => "comment",
            StyleTag::String => "string",
            StyleTag::Number => "number",
            StyleTag::Operator => "operator",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A styled byte range within one block's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first styled byte.
    pub start: usize,
    /// Number of styled bytes.
    pub len: usize,
    pub tag: StyleTag,
}

impl Span {
    pub const fn new(start: usize, len: usize, tag: StyleTag) -> Self {
        Span { start, len, tag }
    }

    /// Byte offset one past the last styled byte.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `offset` falls inside this span.
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }
}

/// State threaded from one block to the next.
///
/// The first block of a document always starts in [`ContinuationState::Normal`].
/// Each block's exit state becomes the next block's entry state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContinuationState {
    /// Not inside any multi-block construct.
    #[default]
    Normal,
    /// Inside a triple-quoted string opened in an earlier block.
    InTripleQuotedString,
}

impl ContinuationState {
    pub const fn is_inside_string(self) -> bool {
        matches!(self, ContinuationState::InTripleQuotedString)
    }
}

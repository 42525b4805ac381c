//! Declarative rule table.
//!
//! Rules are declared as static `(name, pattern, tag)` descriptors and
//! compiled once into a [`RuleTable`]. The table is immutable after
//! construction and is shared read-only between every document that
//! highlights with it.
//!
//! # Priority
//!
//! Rules are applied in table order and later rules overwrite earlier ones
//! where their spans overlap. In increasing priority:
//!
//! 1. keywords (one rule per reserved word, equal priority among themselves)
//! 2. comment
//! 3. single-quoted string
//! 4. double-quoted string
//! 5. number
//! 6. operator run

use std::slice;

use regex::Regex;

use crate::style::StyleTag;

/// Reserved words highlighted as keywords.
///
/// Matched case-insensitively and only as whole words.
pub const KEYWORDS: &[&str] = &[
    "and", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "exec", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "not",
    "or", "pass", "print", "raise", "return", "try", "while", "yield",
];

/// Structural rules, in priority order.
///
/// None of these patterns can match across a block boundary: blocks never
/// contain a newline, and `.` does not match one.
pub(crate) const STRUCTURAL_RULES: &[(&str, &str, StyleTag)] = &[
    // `#` to end of block
    ("comment", r"#.*", StyleTag::Comment),
    // Shortest run between single quotes, no escapes
    ("single_quoted", r"'.*?'", StyleTag::String),
    // Shortest run between double quotes, no escapes
    ("double_quoted", r#"".*?""#, StyleTag::String),
    // Decimal digits between word boundaries (`a12` is not a number)
    ("number", r"\b[0-9]+\b", StyleTag::Number),
    // Maximal run of `\ | < > = ! + - * / %`
    ("operator", r"[\\|<>=!+\-*/%]+", StyleTag::Operator),
];

/// A compiled pattern and the tag its matches receive.
#[derive(Clone, Debug)]
pub struct Rule {
    name: &'static str,
    regex: Regex,
    tag: StyleTag,
}

impl Rule {
    /// Descriptor name (the keyword itself for keyword rules).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn tag(&self) -> StyleTag {
        self.tag
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Ordered, immutable list of highlighting rules.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compile the keyword rules followed by the structural rules.
    pub fn new() -> Self {
        let mut rules = Vec::with_capacity(KEYWORDS.len() + STRUCTURAL_RULES.len());

        for &keyword in KEYWORDS {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
            rules.push(Rule {
                name: keyword,
                regex: compile(&pattern),
                tag: StyleTag::Keyword,
            });
        }

        for &(name, pattern, tag) in STRUCTURAL_RULES {
            rules.push(Rule {
                name,
                regex: compile(pattern),
                tag,
            });
        }

        tracing::debug!(rules = rules.len(), "compiled highlighting rules");
        RuleTable { rules }
    }

    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Position of the first rule with the given descriptor name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name == name)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[expect(
    clippy::expect_used,
    reason = "patterns are fixed literals, all compiled by the rule table tests"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in highlighting pattern must compile")
}

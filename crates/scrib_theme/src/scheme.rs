//! Tag-to-format resolution.

use bitflags::bitflags;
use scrib_highlight::StyleTag;

use crate::color::Rgb;

bitflags! {
    /// Font attributes applied on top of the foreground color.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

/// Concrete display format for one style tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextFormat {
    pub foreground: Rgb,
    pub font: FontStyle,
}

/// Persisted colors, one per style tag plus two reserved entries.
///
/// Keys missing from a persisted scheme fall back to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Reserved; no tag resolves to it yet.
    pub error: Rgb,
    pub comment: Rgb,
    pub keyword: Rgb,
    /// Operator color.
    pub sign: Rgb,
    pub number: Rgb,
    pub string: Rgb,
    /// Reserved; unstyled text keeps the host's own color.
    pub text: Rgb,
}

impl ColorScheme {
    /// Color assigned to a tag.
    pub fn color(&self, tag: StyleTag) -> Rgb {
        match tag {
            StyleTag::Keyword => self.keyword,
            StyleTag::Comment => self.comment,
            StyleTag::String => self.string,
            StyleTag::Number => self.number,
            StyleTag::Operator => self.sign,
        }
    }

    /// Mutable color slot for a tag.
    pub fn color_mut(&mut self, tag: StyleTag) -> &mut Rgb {
        match tag {
            StyleTag::Keyword => &mut self.keyword,
            StyleTag::Comment => &mut self.comment,
            StyleTag::String => &mut self.string,
            StyleTag::Number => &mut self.number,
            StyleTag::Operator => &mut self.sign,
        }
    }

    /// Full display format for a tag: keywords are bold, comments italic.
    pub fn format(&self, tag: StyleTag) -> TextFormat {
        let font = match tag {
            StyleTag::Keyword => FontStyle::BOLD,
            StyleTag::Comment => FontStyle::ITALIC,
            StyleTag::String | StyleTag::Number | StyleTag::Operator => FontStyle::empty(),
        };
        TextFormat {
            foreground: self.color(tag),
            font,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            error: Rgb::from_hex(0xaa_0000),
            comment: Rgb::from_hex(0xa0_a0a0),
            keyword: Rgb::from_hex(0x00_007f),
            sign: Rgb::from_hex(0xaa_00ff),
            number: Rgb::from_hex(0xff_aa00),
            string: Rgb::from_hex(0x00_5500),
            text: Rgb::from_hex(0x00_0000),
        }
    }
}

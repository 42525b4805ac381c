//! RGB colors in `#rrggbb` notation.

use std::fmt;
use std::str::FromStr;

/// Error parsing a color string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),
    #[error("color `{0}` must have 3 or 6 hex digits")]
    InvalidLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// An opaque 24-bit color.
///
/// Parses `#rrggbb` and `#rgb` (any case); always displays as lowercase
/// `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Build from a `0xRRGGBB` value.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "each channel is masked to 8 bits"
    )]
    pub const fn from_hex(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_owned()))?;
        if digits.len() != 3 && digits.len() != 6 {
            return Err(ColorError::InvalidLength(s.to_owned()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_owned()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidDigit(s.to_owned()))?;
        if digits.len() == 6 {
            return Ok(Rgb::from_hex(value));
        }
        // `#abc` is shorthand for `#aabbcc`
        #[allow(
            clippy::cast_possible_truncation,
            reason = "each nibble is masked to 4 bits"
        )]
        let expand = |shift: u32| -> u8 {
            let nibble = ((value >> shift) & 0xf) as u8;
            nibble << 4 | nibble
        };
        Ok(Rgb::new(expand(8), expand(4), expand(0)))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

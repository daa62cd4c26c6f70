// ABOUTME: 8-bit RGB color with hex parsing and formatting.
// ABOUTME: Used for the theme colors stored in the settings file.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("Color must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),

    #[error("Invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Light sky blue, the default node fill
    pub const SKY: Self = Self::rgb(0x87, 0xce, 0xfa);

    /// Orange-red, used to outline nodes on a search path
    pub const HIGHLIGHT: Self = Self::rgb(0xff, 0x45, 0x00);

    /// Fills for the nodes of a red-black tree
    pub const RB_RED: Self = Self::rgb(0xc6, 0x28, 0x28);
    pub const RB_BLACK: Self = Self::rgb(0x21, 0x21, 0x21);

    /// Parse `#rgb` or `#rrggbb` (case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };

        match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(Color::from_hex("#ff8100"), Ok(Color::rgb(255, 129, 0)));
        assert_eq!(Color::from_hex("#FF8100"), Ok(Color::rgb(255, 129, 0)));
        assert_eq!(Color::from_hex("#f80"), Ok(Color::rgb(255, 136, 0)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!(Color::from_hex("ff8100"), Err(ColorParseError::MissingHash(_))));
        assert!(matches!(Color::from_hex("#ff81"), Err(ColorParseError::BadLength(_))));
        assert!(matches!(Color::from_hex("#gg8100"), Err(ColorParseError::BadDigit(_))));
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#").is_err());
    }

    #[test]
    fn formats_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x0C, 0xFF).to_hex(), "#ab0cff");
        assert_eq!(Color::SKY.to_string(), "#87cefa");
    }
}

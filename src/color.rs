//! The four-color tile alphabet
//!
//! Tile edges carry one of four path colors. Observations and tile codes
//! render them as the digits `1`–`4`; `0` is reserved for "no color detected"
//! and never names a real color.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for color code failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Numeric code outside 1..=4
    #[error("invalid color code {0}, expected 1, 2, 3 or 4")]
    OutOfRange(i64),
    /// Character that is not one of the digits 1..=4
    #[error("invalid color digit '{0}'")]
    InvalidDigit(char),
}

/// A tile path color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Color {
    Blue = 1,
    Yellow = 2,
    Red = 3,
    Green = 4,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Red, Color::Green];

    /// Numeric code (1..=4).
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Build a color from its numeric code.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecode::color::Color;
    ///
    /// assert_eq!(Color::from_code(3).unwrap(), Color::Red);
    /// assert!(Color::from_code(0).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<Color, ColorError> {
        match code {
            1 => Ok(Color::Blue),
            2 => Ok(Color::Yellow),
            3 => Ok(Color::Red),
            4 => Ok(Color::Green),
            other => Err(ColorError::OutOfRange(other)),
        }
    }

    /// Parse a single digit character.
    pub fn from_digit(c: char) -> Result<Color, ColorError> {
        match c.to_digit(10) {
            Some(d) => Color::from_code(i64::from(d)).map_err(|_| ColorError::InvalidDigit(c)),
            None => Err(ColorError::InvalidDigit(c)),
        }
    }

    /// Digit character used in tile codes.
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Green => "green",
        }
    }

    /// Reference print color of the physical tiles, as `#RRGGBB`.
    pub const fn reference_hex(self) -> &'static str {
        match self {
            Color::Blue => "#0C6CD9",
            Color::Yellow => "#FFE800",
            Color::Red => "#D71F2B",
            Color::Green => "#00A145",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digit())
    }
}

impl TryFrom<u8> for Color {
    type Error = ColorError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Color::from_code(i64::from(code))
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.code()
    }
}

/// Render a color sequence as its digit string, e.g. `[Red, Blue]` -> `"31"`.
pub fn digits(colors: &[Color]) -> String {
    colors.iter().map(|c| c.digit()).collect()
}

/// Parse a digit string into colors.
pub fn parse_digits(s: &str) -> Result<Vec<Color>, ColorError> {
    s.chars().map(Color::from_digit).collect()
}

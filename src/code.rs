//! Six-edge tile codes
//!
//! A tile code lists the color of each of the six edges in traversal order,
//! e.g. `313414`. Codes are plain values; rotating one produces a new code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Color, ColorError};

/// Number of edges on a tile.
pub const EDGE_COUNT: usize = 6;

/// Error type for tile code parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Code does not have six digits
    #[error("tile code has {0} digits, expected 6")]
    WrongLength(usize),
    /// Code contains something other than the digits 1-4
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Edge colors of one tile, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TileCode([Color; EDGE_COUNT]);

impl TileCode {
    pub const fn new(edges: [Color; EDGE_COUNT]) -> Self {
        Self(edges)
    }

    pub fn edges(&self) -> &[Color; EDGE_COUNT] {
        &self.0
    }

    /// Rotate left by `n` edges: the first `n` edges move to the end.
    pub fn rotate_left(&self, n: usize) -> TileCode {
        let mut edges = self.0;
        edges.rotate_left(n % EDGE_COUNT);
        TileCode(edges)
    }

    /// All six rotations, starting with the code itself.
    pub fn rotations(&self) -> impl Iterator<Item = TileCode> + '_ {
        (0..EDGE_COUNT).map(move |n| self.rotate_left(n))
    }

    /// Edge indices carrying `color`, in ascending order.
    pub fn positions(&self, color: Color) -> Vec<usize> {
        self.0.iter().enumerate().filter(|(_, c)| **c == color).map(|(i, _)| i).collect()
    }

    /// Three distinct colors, each on exactly two edges.
    pub fn is_well_formed(&self) -> bool {
        let mut counts = [0usize; 5];
        for color in &self.0 {
            counts[color.code() as usize] += 1;
        }
        let present: Vec<usize> = counts.iter().copied().filter(|&n| n > 0).collect();
        present.len() == 3 && present.iter().all(|&n| n == 2)
    }

    /// Colors present on the tile, in code order.
    pub fn colors(&self) -> Vec<Color> {
        Color::ALL.into_iter().filter(|c| self.0.contains(c)).collect()
    }
}

impl std::fmt::Display for TileCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for TileCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = crate::color::parse_digits(s)?;
        let len = colors.len();
        let edges: [Color; EDGE_COUNT] =
            colors.try_into().map_err(|_| CodeError::WrongLength(len))?;
        Ok(TileCode(edges))
    }
}

impl TryFrom<String> for TileCode {
    type Error = CodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TileCode> for String {
    fn from(code: TileCode) -> String {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TileCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(code("313414").to_string(), "313414");
        assert_eq!("31341".parse::<TileCode>(), Err(CodeError::WrongLength(5)));
        assert_eq!(
            "313415".parse::<TileCode>(),
            Err(CodeError::Color(ColorError::InvalidDigit('5')))
        );
    }

    #[test]
    fn test_rotate_left() {
        assert_eq!(code("112233").rotate_left(1).to_string(), "122331");
        assert_eq!(code("112233").rotate_left(6), code("112233"));
        assert_eq!(code("112233").rotate_left(8), code("112233").rotate_left(2));
    }

    #[test]
    fn test_rotations_cover_all_shifts() {
        let all: Vec<String> = code("112233").rotations().map(|c| c.to_string()).collect();
        assert_eq!(all, vec!["112233", "122331", "223311", "233112", "331122", "311223"]);
    }

    #[test]
    fn test_positions() {
        assert_eq!(code("313414").positions(Color::Blue), vec![1, 4]);
        assert_eq!(code("313414").positions(Color::Yellow), Vec::<usize>::new());
    }

    #[test]
    fn test_well_formed() {
        assert!(code("313414").is_well_formed());
        assert!(!code("121232").is_well_formed());
        assert!(!code("111122").is_well_formed());
        assert!(!code("123412").is_well_formed());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&code("141343")).unwrap();
        assert_eq!(json, "\"141343\"");
        let back: TileCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code("141343"));
    }
}

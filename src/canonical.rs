//! Canonical tile orientation
//!
//! The same physical tile can be read starting from any of its six edges.
//! The catalog stores each tile in one reference rotation chosen by a pivot
//! color: the first of blue, yellow, red whose two edges are not opposite
//! each other. Green is never used as the pivot.

use crate::code::TileCode;
use crate::color::Color;

/// Pivot colors in priority order.
pub const PIVOT_COLORS: [Color; 3] = [Color::Blue, Color::Yellow, Color::Red];

/// Edge distance between the first two occurrences of `color`, and the
/// position of the first, or `None` if the color occurs less than twice.
pub fn pivot_distance(code: &TileCode, color: Color) -> Option<(usize, usize)> {
    let positions = code.positions(color);
    match positions.as_slice() {
        [first, second, ..] => Some((second - first, *first)),
        _ => None,
    }
}

/// Rotate a tile code into its canonical orientation.
///
/// Total and idempotent. A code in which every pivot color sits on opposite
/// edges (distance 3) is returned as is.
///
/// # Examples
///
/// ```
/// use tilecode::canonical::canonicalize;
/// use tilecode::code::TileCode;
///
/// let code: TileCode = "343141".parse().unwrap();
/// assert_eq!(canonicalize(&code).to_string(), "141343");
/// ```
pub fn canonicalize(code: &TileCode) -> TileCode {
    for color in PIVOT_COLORS {
        let Some((distance, first)) = pivot_distance(code, color) else {
            continue;
        };
        match distance {
            1 | 2 => return code.rotate_left(first),
            4 | 5 => return code.rotate_left(first + distance),
            _ => {}
        }
    }
    *code
}

/// Whether `code` is already in canonical orientation.
pub fn is_canonical(code: &TileCode) -> bool {
    canonicalize(code) == *code
}

//! The fixed tile catalog
//!
//! 56 tiles, each stored in canonical orientation. A tile's position in
//! [`CATALOG`] is its permanent tile number.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::code::{TileCode, EDGE_COUNT};
use crate::color::Color;

/// Number of tiles in the set.
pub const TILE_COUNT: usize = 56;

/// Catalog rows as digits, indexed by tile number.
const CODES: [&str; TILE_COUNT] = [
    "112323", "212313", "131322", "112332", "131223", "121332", "113232", //
    "112233", "121323", "113223", "131232", "221331", "113322", "121233", //
    "232344", "242343", "224343", "332442", "223434", "242433", "232443", //
    "223344", "323424", "223443", "232434", "224334", "224433", "242334", //
    "114343", "313414", "131344", "114334", "131443", "141334", "113434", //
    "114433", "141343", "113443", "131434", "331441", "113344", "141433", //
    "112424", "212414", "141422", "112442", "141224", "121442", "114242", //
    "112244", "121424", "114224", "141242", "221441", "114422", "121244", //
];

/// Canonical tile codes, indexed by tile number. A malformed row fails
/// const evaluation.
pub const CATALOG: [TileCode; TILE_COUNT] = decode_rows(CODES);

const fn decode_row(row: &str) -> TileCode {
    let bytes = row.as_bytes();
    assert!(bytes.len() == EDGE_COUNT, "catalog row must have six digits");
    let mut edges = [Color::Blue; EDGE_COUNT];
    let mut i = 0;
    while i < EDGE_COUNT {
        edges[i] = match bytes[i] {
            b'1' => Color::Blue,
            b'2' => Color::Yellow,
            b'3' => Color::Red,
            b'4' => Color::Green,
            _ => panic!("catalog row digit must be 1-4"),
        };
        i += 1;
    }
    TileCode::new(edges)
}

const fn decode_rows(rows: [&str; TILE_COUNT]) -> [TileCode; TILE_COUNT] {
    let mut codes = [TileCode::new([Color::Blue; EDGE_COUNT]); TILE_COUNT];
    let mut i = 0;
    while i < TILE_COUNT {
        codes[i] = decode_row(rows[i]);
        i += 1;
    }
    codes
}

/// Reverse index from canonical code to tile number, built once.
static INDEX: LazyLock<HashMap<TileCode, usize>> =
    LazyLock::new(|| CATALOG.iter().enumerate().map(|(number, code)| (*code, number)).collect());

/// A canonical code that is not part of the tile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tile code {code} is not in the catalog")]
pub struct UnknownTileCode {
    pub code: TileCode,
}

/// Find the tile number of a canonical code.
///
/// # Examples
///
/// ```
/// use tilecode::catalog::lookup;
///
/// assert_eq!(lookup(&"313414".parse().unwrap()), Ok(29));
/// assert!(lookup(&"123123".parse().unwrap()).is_err());
/// ```
pub fn lookup(code: &TileCode) -> Result<usize, UnknownTileCode> {
    INDEX.get(code).copied().ok_or(UnknownTileCode { code: *code })
}

/// Canonical code of a tile number.
pub fn tile(number: usize) -> Option<TileCode> {
    CATALOG.get(number).copied()
}

/// All tiles as `(number, code)` pairs, in catalog order.
pub fn entries() -> impl Iterator<Item = (usize, TileCode)> {
    CATALOG.into_iter().enumerate()
}

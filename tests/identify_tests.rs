//! Library-level tests for the identification pipeline
//!
//! Exercises the catalog as a whole and the end-to-end path from an
//! eight-segment observation to a tile number.

use tilecode::canonical::{canonicalize, is_canonical};
use tilecode::catalog::{self, TILE_COUNT};
use tilecode::code::TileCode;
use tilecode::color::{digits, Color};
use tilecode::identify::{tile_number, Identification, IdentifyError, Identifier};
use tilecode::matcher::{bind, find_match};
use tilecode::normalize::{close_cycle, compress, normalize, Candidate};
use tilecode::observation::Observation;
use tilecode::template::ShapeClass;

const SAMPLE: &str = "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]";

fn observation_of(code: &TileCode) -> Observation {
    let segments: Vec<String> = code.edges().iter().map(|c| c.code().to_string()).collect();
    Observation::from_json(&format!("[{}, 0, 0]", segments.join(", "))).unwrap()
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_entries_are_well_formed_and_canonical() {
    assert_eq!(catalog::entries().count(), TILE_COUNT);
    for (number, code) in catalog::entries() {
        assert!(code.is_well_formed(), "tile {} ({}) is malformed", number, code);
        assert!(is_canonical(&code), "tile {} ({}) is not canonical", number, code);
        assert_eq!(catalog::lookup(&code), Ok(number));
    }
}

#[test]
fn test_every_rotation_of_a_tile_finds_it() {
    for (number, code) in catalog::entries() {
        for rotated in code.rotations() {
            assert_eq!(
                tile_number(&rotated),
                Ok(number),
                "rotation {} of tile {}",
                rotated,
                number
            );
        }
    }
}

#[test]
fn test_every_tile_is_reachable_from_its_compressed_sequence() {
    for (number, code) in catalog::entries() {
        let candidate = Candidate::new(close_cycle(compress(code.edges())));
        let reached = ShapeClass::ALL.iter().any(|class| {
            find_match(&candidate, &[class.compact()])
                .map_or(false, |m| canonicalize(&m.code) == code)
        });
        assert!(reached, "tile {} ({}) unreachable from {}", number, code, candidate);
    }
}

#[test]
fn test_every_tile_is_identified_from_a_clean_observation() {
    let identifier = Identifier::new();
    for (number, code) in catalog::entries() {
        let obs = observation_of(&code);
        let found = ShapeClass::ALL.iter().any(|&class| {
            let result = identifier.identify(&obs, Some(class));
            result.ok().and_then(|r| r.tile_number()) == Some(number)
        });
        assert!(found, "tile {} ({}) not identified from {}", number, code, obs);
    }
}

#[test]
fn test_opposite_pair_codes_are_missing_from_catalog() {
    for s in ["123123", "132132", "231231", "213213"] {
        let code: TileCode = s.parse().unwrap();
        assert_eq!(canonicalize(&code), code);
        assert!(
            matches!(tile_number(&code), Err(IdentifyError::UnknownTileCode { .. })),
            "{} should be unknown",
            s
        );
    }
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_sample_candidates_in_order() {
    let candidates: Vec<String> =
        normalize(&Observation::from_json(SAMPLE).unwrap()).iter().map(|c| c.to_string()).collect();
    assert_eq!(
        candidates,
        vec!["31414", "34314", "314", "343141", "314134", "3141", "3431", "3134", "31"]
    );
}

#[test]
fn test_sample_identified_as_clh() {
    let result =
        Identifier::new().identify(&Observation::from_json(SAMPLE).unwrap(), Some(ShapeClass::Clh));
    let m = match result {
        Ok(Identification::Tile(m)) => m,
        other => panic!("expected a tile, got {:?}", other),
    };
    assert_eq!(m.trace.code.to_string(), "343141");
    assert_eq!(m.canonical.to_string(), "141343");
    assert_eq!(m.number, 36);
    assert_eq!(catalog::tile(36), Some(m.canonical));
}

#[test]
fn test_bound_clh_sequence_is_tile_29() {
    let seq = [Color::Red, Color::Blue, Color::Red, Color::Green, Color::Blue, Color::Green];
    assert_eq!(digits(&seq), "313414");
    let code = bind(&seq, ShapeClass::Clh.compact()).unwrap();
    assert_eq!(code.to_string(), "313414");
    assert_eq!(tile_number(&code), Ok(29));
}

#[test]
fn test_fabricated_code_is_unknown() {
    let code: TileCode = "123123".parse().unwrap();
    assert_eq!(
        tile_number(&code),
        Err(IdentifyError::UnknownTileCode { code, canonical: code })
    );
}

#[test]
fn test_observation_with_nothing_plausible_is_no_match() {
    // Blue three times after compression
    let obs = Observation::from_json("[1, 2, 1, 3, 1, 2, 0, 0]").unwrap();
    assert!(normalize(&obs).is_empty());
    assert_eq!(Identifier::new().identify(&obs, None), Ok(Identification::NoMatch));
}

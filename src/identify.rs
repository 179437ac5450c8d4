//! End-to-end tile identification
//!
//! Runs one observation through normalization, template matching,
//! canonicalization and catalog lookup.

use serde::Serialize;
use thiserror::Error;

use crate::canonical::canonicalize;
use crate::catalog::{self, UnknownTileCode};
use crate::code::TileCode;
use crate::matcher::{select_match, MatchTrace};
use crate::normalize::normalize;
use crate::observation::{Observation, ObservationError, RawSegment};
use crate::template::{ShapeClass, DEFAULT_TRIAL_PATTERNS};

/// Error type for identification failures
///
/// "No match" is not an error; see [`Identification::NoMatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifyError {
    /// Observation failed boundary validation
    #[error("invalid observation: {0}")]
    InvalidObservation(#[from] ObservationError),
    /// A bound and canonicalized code is missing from the catalog
    #[error("matched tile code {code} (canonical {canonical}) is not in the catalog")]
    UnknownTileCode { code: TileCode, canonical: TileCode },
}

/// A successfully identified tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileMatch {
    /// Catalog index
    pub number: usize,
    /// Canonical code as stored in the catalog
    pub canonical: TileCode,
    /// How the code was bound
    pub trace: MatchTrace,
}

/// Outcome of a well-formed identification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Identification {
    Tile(TileMatch),
    NoMatch,
}

impl Identification {
    pub fn tile_number(&self) -> Option<usize> {
        match self {
            Identification::Tile(m) => Some(m.number),
            Identification::NoMatch => None,
        }
    }
}

/// Identification settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    patterns: Vec<String>,
}

impl Default for Identifier {
    fn default() -> Self {
        Self { patterns: DEFAULT_TRIAL_PATTERNS.iter().map(|p| p.to_string()).collect() }
    }
}

impl Identifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom trial list for observations without a shape class.
    pub fn with_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { patterns: patterns.into_iter().map(Into::into).collect() }
    }

    /// Identify a validated observation.
    ///
    /// With a shape class only that class's template is tried, under all
    /// rotations. Without one the configured trial list is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecode::identify::{Identification, Identifier};
    /// use tilecode::observation::Observation;
    /// use tilecode::template::ShapeClass;
    ///
    /// let obs = Observation::from_json("[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]").unwrap();
    /// let result = Identifier::new().identify(&obs, Some(ShapeClass::Clh)).unwrap();
    /// assert_eq!(result.tile_number(), Some(36));
    /// ```
    pub fn identify(
        &self,
        observation: &Observation,
        shape: Option<ShapeClass>,
    ) -> Result<Identification, IdentifyError> {
        let candidates = normalize(observation);
        let trace = match shape {
            Some(class) => select_match(&candidates, &[class.compact()]),
            None => select_match(&candidates, &self.patterns),
        };

        let Some(trace) = trace else {
            tracing::debug!(candidates = candidates.len(), "no template matched {}", observation);
            return Ok(Identification::NoMatch);
        };

        let canonical = canonicalize(&trace.code);
        match catalog::lookup(&canonical) {
            Ok(number) => {
                tracing::debug!(
                    number,
                    pattern = %trace.pattern,
                    shift = trace.shift,
                    "identified {} as tile {}",
                    observation,
                    canonical
                );
                Ok(Identification::Tile(TileMatch { number, canonical, trace }))
            }
            Err(UnknownTileCode { code }) => {
                tracing::warn!(
                    bound = %trace.code,
                    canonical = %code,
                    "bound code missing from catalog"
                );
                Err(IdentifyError::UnknownTileCode { code: trace.code, canonical: code })
            }
        }
    }

    /// Validate raw wire values, then identify.
    pub fn identify_raw(
        &self,
        raw: &[RawSegment],
        shape: Option<ShapeClass>,
    ) -> Result<Identification, IdentifyError> {
        let observation = Observation::from_raw(raw)?;
        self.identify(&observation, shape)
    }
}

/// Canonicalize a full code and look it up.
pub fn tile_number(code: &TileCode) -> Result<usize, IdentifyError> {
    let canonical = canonicalize(code);
    catalog::lookup(&canonical)
        .map_err(|_| IdentifyError::UnknownTileCode { code: *code, canonical })
}

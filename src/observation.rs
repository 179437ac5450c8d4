//! Raw segment observations
//!
//! An observation is what the upstream color clustering reports for the eight
//! outer segments of a cropped tile image, in a fixed counter-clockwise order.
//! Each segment is a single color, an ambiguous pair of two candidate colors,
//! or absent (`0` in the wire format).
//!
//! Observations are validated here, at the boundary, so the normalizer only
//! ever sees well-formed input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Color, ColorError};

/// Number of outer segments in an observation.
pub const SEGMENT_COUNT: usize = 8;

/// Error type for malformed observations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    /// Observation does not have exactly eight segments
    #[error("observation has {0} segments, expected 8")]
    WrongLength(usize),
    /// Segment value is not a color code or the absent marker
    #[error("segment {index}: {source}")]
    InvalidColor {
        index: usize,
        #[source]
        source: ColorError,
    },
    /// Ambiguous segment with other than two choices
    #[error("segment {index}: ambiguous entry has {len} choices, expected 2")]
    PairArity { index: usize, len: usize },
    /// Ambiguous segment whose two choices are the same color
    #[error("segment {index}: ambiguous entry repeats color {color}")]
    PairNotDistinct { index: usize, color: Color },
    /// Input could not be decoded as an observation at all
    #[error("malformed observation: {0}")]
    Json(String),
}

/// One observed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// No tile color detected
    Absent,
    /// A single, disambiguated color
    Single(Color),
    /// Either of two colors; order is significant for candidate expansion
    Ambiguous(Color, Color),
}

impl Segment {
    /// Check a raw wire value and turn it into a segment.
    pub fn from_raw(index: usize, raw: &RawSegment) -> Result<Segment, ObservationError> {
        let color = |code: i64| {
            Color::from_code(code)
                .map_err(|source| ObservationError::InvalidColor { index, source })
        };
        match raw {
            RawSegment::Code(0) => Ok(Segment::Absent),
            RawSegment::Code(code) => Ok(Segment::Single(color(*code)?)),
            RawSegment::Choice(choices) => {
                if choices.len() != 2 {
                    return Err(ObservationError::PairArity { index, len: choices.len() });
                }
                let first = color(choices[0])?;
                let second = color(choices[1])?;
                if first == second {
                    return Err(ObservationError::PairNotDistinct { index, color: first });
                }
                Ok(Segment::Ambiguous(first, second))
            }
        }
    }

    /// Wire representation of this segment.
    pub fn to_raw(self) -> RawSegment {
        match self {
            Segment::Absent => RawSegment::Code(0),
            Segment::Single(c) => RawSegment::Code(i64::from(c.code())),
            Segment::Ambiguous(a, b) => {
                RawSegment::Choice(vec![i64::from(a.code()), i64::from(b.code())])
            }
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Absent => write!(f, "0"),
            Segment::Single(c) => write!(f, "{}", c),
            Segment::Ambiguous(a, b) => write!(f, "[{}, {}]", a, b),
        }
    }
}

/// Unvalidated segment as it appears in JSON: an integer or a list of integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSegment {
    Code(i64),
    Choice(Vec<i64>),
}

/// A validated eight-segment observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<RawSegment>", into = "Vec<RawSegment>")]
pub struct Observation {
    segments: [Segment; SEGMENT_COUNT],
}

impl Observation {
    /// Validate raw wire values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecode::observation::{Observation, RawSegment};
    ///
    /// let raw = vec![
    ///     RawSegment::Code(3),
    ///     RawSegment::Choice(vec![4, 3]),
    ///     RawSegment::Code(3),
    ///     RawSegment::Code(1),
    ///     RawSegment::Code(0),
    ///     RawSegment::Choice(vec![4, 1]),
    ///     RawSegment::Code(1),
    ///     RawSegment::Choice(vec![4, 3]),
    /// ];
    /// assert!(Observation::from_raw(&raw).is_ok());
    /// ```
    pub fn from_raw(raw: &[RawSegment]) -> Result<Self, ObservationError> {
        if raw.len() != SEGMENT_COUNT {
            return Err(ObservationError::WrongLength(raw.len()));
        }
        let mut segments = [Segment::Absent; SEGMENT_COUNT];
        for (index, (slot, value)) in segments.iter_mut().zip(raw).enumerate() {
            *slot = Segment::from_raw(index, value)?;
        }
        Ok(Self { segments })
    }

    /// Parse the JSON array form, e.g. `[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]`.
    pub fn from_json(s: &str) -> Result<Self, ObservationError> {
        let raw: Vec<RawSegment> =
            serde_json::from_str(s).map_err(|e| ObservationError::Json(e.to_string()))?;
        Self::from_raw(&raw)
    }

    pub fn segments(&self) -> &[Segment; SEGMENT_COUNT] {
        &self.segments
    }

    /// Number of ambiguous segments.
    pub fn ambiguous_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Ambiguous(..))).count()
    }
}

impl TryFrom<Vec<RawSegment>> for Observation {
    type Error = ObservationError;

    fn try_from(raw: Vec<RawSegment>) -> Result<Self, Self::Error> {
        Observation::from_raw(&raw)
    }
}

impl From<Observation> for Vec<RawSegment> {
    fn from(obs: Observation) -> Self {
        obs.segments.iter().map(|s| s.to_raw()).collect()
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", segment)?;
        }
        write!(f, "]")
    }
}

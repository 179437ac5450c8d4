//! Candidate expansion for ambiguous observations
//!
//! Turns one observation into the ordered set of concrete color sequences it
//! could plausibly represent. Every ambiguous pair `(a, b)` forks each branch
//! that existed before it into `b a`, `a` and `b` variants while the existing
//! branch keeps both colors as `a b`. The result over-generates and overlaps;
//! duplicates are removed in first-occurrence order, which keeps the
//! enumeration order and the winning candidate stable.

use std::collections::HashSet;

use crate::color::{digits, Color};
use crate::observation::{Observation, Segment};

/// Longest candidate kept after compression (one run per tile edge).
pub const MAX_CANDIDATE_LEN: usize = 6;

/// A color may appear at most this many times in a candidate.
pub const MAX_COLOR_REPEATS: usize = 2;

/// A compressed, circular color sequence derived from an observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(Vec<Color>);

impl Candidate {
    /// Wrap an already-compressed sequence.
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&digits(&self.0))
    }
}

impl std::str::FromStr for Candidate {
    type Err = crate::color::ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::color::parse_digits(s).map(Candidate)
    }
}

/// Expand an observation into all raw branches, before compression.
///
/// Absent segments are skipped. Branch order follows creation order: the
/// forks of a branch are appended at the end of the list.
pub fn expand_branches(observation: &Observation) -> Vec<Vec<Color>> {
    let mut branches: Vec<Vec<Color>> = vec![Vec::new()];

    for segment in observation.segments() {
        match *segment {
            Segment::Absent => {}
            Segment::Single(color) => {
                for branch in &mut branches {
                    branch.push(color);
                }
            }
            Segment::Ambiguous(a, b) => {
                let existing = branches.len();
                for i in 0..existing {
                    let base = branches[i].clone();
                    branches.push(extended(&base, &[b, a]));
                    branches.push(extended(&base, &[a]));
                    branches.push(extended(&base, &[b]));
                    branches[i].extend([a, b]);
                }
            }
        }
    }

    branches
}

fn extended(base: &[Color], tail: &[Color]) -> Vec<Color> {
    let mut branch = Vec::with_capacity(base.len() + tail.len());
    branch.extend_from_slice(base);
    branch.extend_from_slice(tail);
    branch
}

/// Collapse runs of equal adjacent colors into a single occurrence.
///
/// # Examples
///
/// ```
/// use tilecode::color::Color::{Green, Red};
/// use tilecode::normalize::compress;
///
/// assert_eq!(compress(&[Red, Red, Green, Green, Red]), vec![Red, Green, Red]);
/// ```
pub fn compress(seq: &[Color]) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(seq.len());
    for &color in seq {
        if out.last() != Some(&color) {
            out.push(color);
        }
    }
    out
}

/// Treat the sequence as circular: drop the last color if it repeats the first.
///
/// A one-element sequence closes onto itself and becomes empty.
pub fn close_cycle(mut seq: Vec<Color>) -> Vec<Color> {
    if !seq.is_empty() && seq.first() == seq.last() {
        seq.pop();
    }
    seq
}

/// Whether a compressed sequence can describe a tile edge pattern.
fn is_plausible(seq: &[Color]) -> bool {
    if seq.is_empty() || seq.len() > MAX_CANDIDATE_LEN {
        return false;
    }
    let mut counts = [0usize; 5];
    for color in seq {
        counts[color.code() as usize] += 1;
    }
    counts.iter().all(|&n| n <= MAX_COLOR_REPEATS)
}

/// Produce the deduplicated, ordered candidate set for an observation.
///
/// Never fails; an observation whose branches are all implausible yields an
/// empty set.
pub fn normalize(observation: &Observation) -> Vec<Candidate> {
    let branches = expand_branches(observation);
    let mut seen: HashSet<Vec<Color>> = HashSet::new();
    let mut candidates = Vec::new();

    for branch in &branches {
        let seq = close_cycle(compress(branch));
        if !is_plausible(&seq) {
            continue;
        }
        if seen.insert(seq.clone()) {
            candidates.push(Candidate(seq));
        }
    }

    tracing::debug!(
        branches = branches.len(),
        candidates = candidates.len(),
        "normalized observation {}",
        observation
    );
    candidates
}

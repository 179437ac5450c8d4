//! Rotation matching and variant selection
//!
//! A candidate sequence matches a compact template when some cyclic rotation
//! of it binds every template letter to a color, consistently and
//! injectively. The bound letters are then substituted into the expanded
//! template to recover all six edges.
//!
//! Iteration is template-major, shift-minor, candidate-outermost; the first
//! success wins. There is no scoring between competing matches.

use std::collections::HashMap;

use serde::Serialize;

use crate::code::{TileCode, EDGE_COUNT};
use crate::color::Color;
use crate::normalize::Candidate;
use crate::template::expand_pattern;

/// Letter-to-color assignment built while walking a template.
#[derive(Debug, Default)]
struct Binding {
    by_letter: HashMap<char, Color>,
    used: [bool; 5],
}

impl Binding {
    /// Bind `letter` to `color`. Fails on a contradiction with an earlier
    /// binding of the same letter, or if another letter already took `color`.
    fn assign(&mut self, letter: char, color: Color) -> bool {
        match self.by_letter.get(&letter) {
            Some(&bound) => bound == color,
            None => {
                let slot = &mut self.used[color.code() as usize];
                if *slot {
                    return false;
                }
                *slot = true;
                self.by_letter.insert(letter, color);
                true
            }
        }
    }

    fn substitute(&self, expanded: &str) -> Option<TileCode> {
        let edges: Vec<Color> = expanded
            .chars()
            .map(|letter| self.by_letter.get(&letter).copied())
            .collect::<Option<_>>()?;
        let edges: [Color; EDGE_COUNT] = edges.try_into().ok()?;
        Some(TileCode::new(edges))
    }
}

/// Bind a sequence against a compact template and expand it to six edges.
///
/// Returns `None` if the lengths differ, a letter would map to two colors,
/// two letters would share a color, or the expansion is not six letters.
///
/// # Examples
///
/// ```
/// use tilecode::color::parse_digits;
/// use tilecode::matcher::bind;
///
/// let seq = parse_digits("313414").unwrap();
/// assert_eq!(bind(&seq, "abacbc").unwrap().to_string(), "313414");
/// assert!(bind(&seq, "abc").is_none());
/// ```
pub fn bind(sequence: &[Color], compact: &str) -> Option<TileCode> {
    if compact.chars().count() != sequence.len() {
        return None;
    }
    let mut binding = Binding::default();
    for (letter, &color) in compact.chars().zip(sequence) {
        if !binding.assign(letter, color) {
            return None;
        }
    }
    binding.substitute(expand_pattern(compact))
}

/// Cyclic left rotation: the first `n` elements move to the end.
pub fn rotate_left(sequence: &[Color], n: usize) -> Vec<Color> {
    let mut out = sequence.to_vec();
    let len = out.len();
    if len > 0 {
        out.rotate_left(n % len);
    }
    out
}

/// Where a match came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTrace {
    /// Bound six-edge code, not yet canonicalized
    pub code: TileCode,
    /// Compact template that bound
    pub pattern: String,
    /// Left rotation of the candidate that bound
    pub shift: usize,
    /// Candidate sequence, as digits
    pub candidate: String,
}

/// Try every template in order against every rotation of one candidate.
pub fn find_match<P: AsRef<str>>(candidate: &Candidate, patterns: &[P]) -> Option<MatchTrace> {
    let colors = candidate.colors();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        for shift in 0..colors.len() {
            let rotated = rotate_left(colors, shift);
            if let Some(code) = bind(&rotated, pattern) {
                tracing::trace!(candidate = %candidate, pattern, shift, code = %code, "bound");
                return Some(MatchTrace {
                    code,
                    pattern: pattern.to_string(),
                    shift,
                    candidate: candidate.to_string(),
                });
            }
        }
    }
    None
}

/// First candidate, in enumeration order, that matches any template.
pub fn select_match<P: AsRef<str>>(candidates: &[Candidate], patterns: &[P]) -> Option<MatchTrace> {
    candidates.iter().find_map(|candidate| find_match(candidate, patterns))
}

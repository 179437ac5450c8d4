//! Shape template registry
//!
//! Tiles fall into four structural classes depending on how their three
//! colored paths touch the six edges. Each class has a compact template,
//! one letter per color run as seen in a compressed observation, and an
//! expanded template with one letter per edge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compact templates tried, in order, when no shape class is known.
///
/// `ababcb` has no registered expansion and is matched literally.
pub const DEFAULT_TRIAL_PATTERNS: [&str; 4] = ["abc", "abcbc", "abcb", "ababcb"];

/// Error type for unknown shape class names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape class '{0}', expected one of: ccc, cxx, clc, clh")]
pub struct TemplateError(pub String);

/// Structural tile class reported by the upstream detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShapeClass {
    /// Three separate curves
    Ccc,
    /// One curve and two crossing straights
    Cxx,
    /// Curve, long curve, curve
    Clc,
    /// Curve, long curve and straight
    Clh,
}

/// Registry rows: class, compact form, expanded form.
const REGISTRY: [(ShapeClass, &str, &str); 4] = [
    (ShapeClass::Ccc, "abc", "aabbcc"),
    (ShapeClass::Cxx, "abcbc", "aabcbc"),
    (ShapeClass::Clc, "abcb", "aabccb"),
    (ShapeClass::Clh, "abacbc", "abacbc"),
];

impl ShapeClass {
    pub const ALL: [ShapeClass; 4] =
        [ShapeClass::Ccc, ShapeClass::Cxx, ShapeClass::Clc, ShapeClass::Clh];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeClass::Ccc => "ccc",
            ShapeClass::Cxx => "cxx",
            ShapeClass::Clc => "clc",
            ShapeClass::Clh => "clh",
        }
    }

    /// Compact template, one letter per color run.
    pub fn compact(self) -> &'static str {
        REGISTRY.iter().find(|(class, _, _)| *class == self).map_or("", |(_, compact, _)| *compact)
    }

    /// Expanded template, one letter per edge.
    pub fn expanded(self) -> &'static str {
        expand_pattern(self.compact())
    }

    /// Find the class whose compact template is `pattern`.
    pub fn from_compact(pattern: &str) -> Option<ShapeClass> {
        REGISTRY.iter().find(|(_, compact, _)| *compact == pattern).map(|(class, _, _)| *class)
    }
}

impl std::fmt::Display for ShapeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ShapeClass {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TemplateError(s.to_string()))
    }
}

/// Expand a compact template.
///
/// Unknown patterns are returned unchanged.
///
/// # Examples
///
/// ```
/// use tilecode::template::expand_pattern;
///
/// assert_eq!(expand_pattern("abcb"), "aabccb");
/// assert_eq!(expand_pattern("ababcb"), "ababcb");
/// ```
pub fn expand_pattern(pattern: &str) -> &str {
    REGISTRY
        .iter()
        .find(|(_, compact, _)| *compact == pattern)
        .map_or(pattern, |(_, _, expanded)| *expanded)
}

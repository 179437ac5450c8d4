//! Data models for observation input files

use serde::{Deserialize, Serialize};

use crate::observation::Observation;
use crate::template::ShapeClass;

/// One observation record from an input file.
///
/// On the wire a record is either the bare segment array or an object:
///
/// ```json
/// {"name": "table_3", "shape": "clh", "segments": [3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObservationRecord {
    /// Label carried through to the report (e.g. the crop file stem)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Shape class reported by the detector, if known
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shape: Option<ShapeClass>,
    pub segments: Observation,
}

impl ObservationRecord {
    pub fn new(segments: Observation) -> Self {
        Self { name: None, shape: None, segments }
    }

    /// Label used in reports: the name, or `line N`.
    pub fn label(&self, line: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("line {}", line))
    }
}

/// A warning message from parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}

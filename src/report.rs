//! Batch recognition reports
//!
//! Runs many observations through the identifier and tallies how many were
//! recognized. The recognition ratio is the main quality signal for the
//! upstream detection and color clustering.

use rayon::prelude::*;
use serde::Serialize;

use crate::code::TileCode;
use crate::identify::{Identification, IdentifyError, Identifier};
use crate::parser::ParsedRecord;
use crate::template::ShapeClass;

/// What happened to one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Tile { number: usize, canonical: TileCode, bound: TileCode, pattern: String },
    NoMatch,
    UnknownTileCode { bound: TileCode, canonical: TileCode },
    InvalidObservation { message: String },
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeClass>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Tally over a batch of observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecognitionReport {
    pub entries: Vec<ReportEntry>,
    /// Tile numbers of recognized records, in input order
    pub recognized_tiles: Vec<usize>,
    pub recognized: usize,
    pub unrecognized: usize,
    /// Bound codes missing from the catalog; not part of the ratio
    pub unknown_codes: usize,
    pub invalid: usize,
    /// Input lines that could not be parsed
    pub skipped_lines: usize,
}

impl RecognitionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one identification result.
    pub fn record(
        &mut self,
        label: String,
        line: usize,
        shape: Option<ShapeClass>,
        result: Result<Identification, IdentifyError>,
    ) {
        let outcome = match result {
            Ok(Identification::Tile(m)) => {
                self.recognized += 1;
                self.recognized_tiles.push(m.number);
                Outcome::Tile {
                    number: m.number,
                    canonical: m.canonical,
                    bound: m.trace.code,
                    pattern: m.trace.pattern,
                }
            }
            Ok(Identification::NoMatch) => {
                self.unrecognized += 1;
                Outcome::NoMatch
            }
            Err(IdentifyError::UnknownTileCode { code, canonical }) => {
                self.unknown_codes += 1;
                Outcome::UnknownTileCode { bound: code, canonical }
            }
            Err(IdentifyError::InvalidObservation(e)) => {
                self.invalid += 1;
                Outcome::InvalidObservation { message: e.to_string() }
            }
        };
        self.entries.push(ReportEntry { label, line, shape, outcome });
    }

    /// `recognized / (recognized + unrecognized)`, or 0 for an empty batch.
    pub fn recognition_ratio(&self) -> f64 {
        let attempted = self.recognized + self.unrecognized;
        if attempted == 0 {
            return 0.0;
        }
        self.recognized as f64 / attempted as f64
    }
}

/// Identify every record and build a report.
///
/// Records are processed in parallel; the report keeps input order. A
/// record's own shape class wins over `default_shape`.
pub fn run_batch(
    identifier: &Identifier,
    records: &[ParsedRecord],
    default_shape: Option<ShapeClass>,
) -> RecognitionReport {
    let results: Vec<_> = records
        .par_iter()
        .map(|parsed| {
            let shape = parsed.record.shape.or(default_shape);
            (shape, identifier.identify(&parsed.record.segments, shape))
        })
        .collect();

    let mut report = RecognitionReport::new();
    for (parsed, (shape, result)) in records.iter().zip(results) {
        report.record(parsed.record.label(parsed.line), parsed.line, shape, result);
    }

    tracing::info!(
        recognized = report.recognized,
        unrecognized = report.unrecognized,
        unknown_codes = report.unknown_codes,
        "processed {} observations",
        records.len()
    );
    report
}

/// Render a report as plain text.
pub fn format_report_text(report: &RecognitionReport) -> String {
    let mut output = String::new();

    for entry in &report.entries {
        let shape = entry.shape.map(|s| format!(" [{}]", s)).unwrap_or_default();
        let line = match &entry.outcome {
            Outcome::Tile { number, canonical, bound, pattern } => {
                format!("tile {:>2}  {} (bound {} via {})", number, canonical, bound, pattern)
            }
            Outcome::NoMatch => "no match".to_string(),
            Outcome::UnknownTileCode { bound, canonical } => {
                format!("UNKNOWN TILE CODE {} (bound {})", canonical, bound)
            }
            Outcome::InvalidObservation { message } => format!("invalid: {}", message),
        };
        output.push_str(&format!("{}{}: {}\n", entry.label, shape, line));
    }

    output.push('\n');
    output.push_str(&format!(
        "Unrecognized tiles: {}, Recognition ratio: {:.2}\n",
        report.unrecognized,
        report.recognition_ratio()
    ));
    if report.unknown_codes > 0 {
        output.push_str(&format!("Codes missing from catalog: {}\n", report.unknown_codes));
    }
    if report.invalid > 0 {
        output.push_str(&format!("Invalid observations: {}\n", report.invalid));
    }
    if report.skipped_lines > 0 {
        output.push_str(&format!("Skipped lines: {}\n", report.skipped_lines));
    }
    output.push_str("\nRecognized tile numbers:\n");
    output.push_str(&format!("{:?}\n", report.recognized_tiles));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObservationRecord;
    use crate::observation::{Observation, ObservationError};

    fn parsed(line: usize, json: &str, shape: Option<ShapeClass>) -> ParsedRecord {
        let mut record = ObservationRecord::new(Observation::from_json(json).unwrap());
        record.shape = shape;
        ParsedRecord { line, record }
    }

    #[test]
    fn test_empty_report_ratio_is_zero() {
        assert_eq!(RecognitionReport::new().recognition_ratio(), 0.0);
    }

    #[test]
    fn test_run_batch_counts_and_order() {
        let records = vec![
            parsed(1, "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]", Some(ShapeClass::Clh)),
            parsed(2, "[0, 0, 0, 0, 0, 0, 0, 0]", None),
            parsed(3, "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]", None),
        ];
        let report = run_batch(&Identifier::new(), &records, None);
        assert_eq!(report.recognized, 2);
        assert_eq!(report.unrecognized, 1);
        assert_eq!(report.recognized_tiles, vec![36, 41]);
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[1].outcome, Outcome::NoMatch);
        assert!((report.recognition_ratio() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_shape_applies_only_without_record_shape() {
        let records = vec![
            parsed(1, "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]", None),
            parsed(2, "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]", Some(ShapeClass::Ccc)),
        ];
        let report = run_batch(&Identifier::new(), &records, Some(ShapeClass::Clh));
        assert_eq!(report.recognized_tiles, vec![36, 35]);
        assert_eq!(report.entries[0].shape, Some(ShapeClass::Clh));
    }

    #[test]
    fn test_unknown_codes_are_kept_out_of_ratio() {
        let records = vec![parsed(1, "[1, 2, 3, 1, 2, 3, 0, 0]", None)];
        let report = run_batch(&Identifier::with_patterns(["abcabc"]), &records, None);
        assert_eq!(report.unknown_codes, 1);
        assert_eq!(report.recognized + report.unrecognized, 0);
        assert!(format_report_text(&report).contains("UNKNOWN TILE CODE 123123"));
    }

    #[test]
    fn test_record_invalid() {
        let mut report = RecognitionReport::new();
        report.record(
            "x".to_string(),
            1,
            None,
            Err(IdentifyError::InvalidObservation(ObservationError::WrongLength(3))),
        );
        assert_eq!(report.invalid, 1);
    }

    #[test]
    fn test_format_report_text() {
        let records =
            vec![parsed(1, "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]", Some(ShapeClass::Clh))];
        let text = format_report_text(&run_batch(&Identifier::new(), &records, None));
        assert!(
            text.contains("line 1 [clh]: tile 36  141343 (bound 343141 via abacbc)"),
            "{}",
            text
        );
        assert!(text.contains("Recognition ratio: 1.00"));
        assert!(text.contains("[36]"));
    }

    #[test]
    fn test_report_json_shape() {
        let records =
            vec![parsed(1, "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]", Some(ShapeClass::Clh))];
        let report = run_batch(&Identifier::new(), &records, None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["recognized"], 1);
        assert_eq!(json["entries"][0]["result"], "tile");
        assert_eq!(json["entries"][0]["number"], 36);
        assert_eq!(json["entries"][0]["canonical"], "141343");
    }
}

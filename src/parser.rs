//! Streaming JSON Lines parsing for observation records
//!
//! One record per line, either a bare segment array or an object with a
//! `segments` field. Blank lines and lines starting with `#` are skipped.
//! Malformed lines become warnings and parsing continues with the next line.

use std::io::{BufRead, BufReader, Read};

use serde_json::Value;
use thiserror::Error;

use crate::models::{ObservationRecord, Warning};
use crate::observation::Observation;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// A record together with the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub line: usize,
    pub record: ObservationRecord,
}

/// Result of parsing a stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub records: Vec<ParsedRecord>,
    pub warnings: Vec<Warning>,
}

/// Parse a single line into a record.
///
/// # Examples
///
/// ```
/// use tilecode::parser::parse_line;
///
/// let record = parse_line("[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]", 1).unwrap();
/// assert_eq!(record.segments.ambiguous_count(), 3);
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<ObservationRecord, ParseError> {
    let err = |message: String| ParseError { message, line: line_number };

    let value: Value = serde_json::from_str(line).map_err(|e| err(e.to_string()))?;
    match value {
        Value::Array(_) => {
            let segments: Observation =
                serde_json::from_value(value).map_err(|e| err(e.to_string()))?;
            Ok(ObservationRecord::new(segments))
        }
        Value::Object(_) => serde_json::from_value(value).map_err(|e| err(e.to_string())),
        _ => Err(err("expected a segment array or an object with \"segments\"".to_string())),
    }
}

/// Parse a stream of observation records, collecting warnings for bad lines.
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    let mut result = ParseResult::default();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                result.warnings.push(Warning { message: e.to_string(), line: line_number });
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed, line_number) {
            Ok(record) => result.records.push(ParsedRecord { line: line_number, record }),
            Err(e) => {
                tracing::warn!("skipping {}", e);
                result.warnings.push(Warning { message: e.message, line: e.line });
            }
        }
    }

    result
}

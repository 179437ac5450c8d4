//! Identification command implementations (identify, candidates, canonicalize)

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use crate::canonical::canonicalize;
use crate::catalog;
use crate::code::TileCode;
use crate::config::OutputFormat;
use crate::identify::Identifier;
use crate::normalize::normalize;
use crate::observation::Observation;
use crate::parser::parse_stream;
use crate::report::{format_report_text, run_batch};
use crate::template::ShapeClass;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the identify command
pub fn run_identify(
    input: &Path,
    shape: Option<ShapeClass>,
    format: OutputFormat,
    strict: bool,
    output: Option<&Path>,
    patterns: &[String],
) -> ExitCode {
    let reader: Box<dyn Read> = if input.as_os_str() == "-" {
        Box::new(io::stdin())
    } else {
        match File::open(input) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    let parsed = parse_stream(reader);
    for warning in &parsed.warnings {
        eprintln!("Warning: line {}: {}", warning.line, warning.message);
    }
    if strict && !parsed.warnings.is_empty() {
        eprintln!("Error: {} line(s) skipped (strict mode)", parsed.warnings.len());
        return ExitCode::from(EXIT_ERROR);
    }

    let identifier = Identifier::with_patterns(patterns.iter().cloned());
    let mut report = run_batch(&identifier, &parsed.records, shape);
    report.skipped_lines = parsed.warnings.len();

    let output_text = match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("Error: Failed to serialize report: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        OutputFormat::Text => format_report_text(&report),
    };

    if let Some(output_path) = output {
        if let Err(e) = std::fs::write(output_path, &output_text) {
            eprintln!("Error: Failed to write '{}': {}", output_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("Report written to: {}", output_path.display());
    } else {
        print!("{}", output_text);
    }

    if strict && report.unknown_codes > 0 {
        eprintln!("Error: {} code(s) missing from the catalog (strict mode)", report.unknown_codes);
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the candidates command
pub fn run_candidates(observation: &str) -> ExitCode {
    let observation = match Observation::from_json(observation) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let candidates = normalize(&observation);
    if candidates.is_empty() {
        eprintln!("No plausible candidates for {}", observation);
    }
    for candidate in &candidates {
        println!("{}", candidate);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the canonicalize command
pub fn run_canonicalize(code: &str) -> ExitCode {
    let code: TileCode = match code.trim().parse() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let canonical = canonicalize(&code);
    println!("{}", canonical);
    match catalog::lookup(&canonical) {
        Ok(number) => {
            println!("tile {}", number);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

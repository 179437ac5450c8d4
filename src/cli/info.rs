//! Info command implementations (catalog, colors)

use std::process::ExitCode;

use crate::catalog;
use crate::color::Color;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the catalog command
pub fn run_catalog(json: bool) -> ExitCode {
    if json {
        let tiles: Vec<_> = catalog::entries()
            .map(|(number, code)| serde_json::json!({ "number": number, "code": code }))
            .collect();
        return match serde_json::to_string_pretty(&tiles) {
            Ok(s) => {
                println!("{}", s);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    println!("Tile catalog ({} tiles):", catalog::TILE_COUNT);
    println!();
    for (number, code) in catalog::entries() {
        println!("  {:>2}  {}", number, code);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the colors command
pub fn run_colors() -> ExitCode {
    println!("Edge colors:");
    for color in Color::ALL {
        println!("  {}  {:<7} {}", color.digit(), color.name(), color.reference_hex());
    }
    println!();
    println!("0 marks a segment with no reliable color.");
    ExitCode::from(EXIT_SUCCESS)
}

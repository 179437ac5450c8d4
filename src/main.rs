//! Tilecode - Command-line tool for identifying Tantrix tiles from edge-color observations

use std::process::ExitCode;

use tilecode::cli;

fn main() -> ExitCode {
    cli::run()
}

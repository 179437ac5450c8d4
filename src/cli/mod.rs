//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod identify;
mod info;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, OutputFormat};
use crate::template::ShapeClass;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Tilecode - Identify Tantrix tiles from observed edge colors
#[derive(Parser)]
#[command(name = "tilecode")]
#[command(about = "Tilecode - Identify Tantrix tiles from observed edge-color segments")]
#[command(version)]
pub struct Cli {
    /// Config file (default: discover tilecode.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. "tilecode=debug" (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify every observation in a JSON Lines file
    Identify {
        /// Input file, one observation per line ("-" for stdin)
        input: PathBuf,

        /// Shape class for records that do not carry one
        #[arg(long, value_enum)]
        shape: Option<ShapeClass>,

        /// Report format (default: from config, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Strict mode: fail on skipped lines or codes missing from the catalog
        #[arg(long)]
        strict: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the candidate sequences derived from one observation
    Candidates {
        /// Observation as JSON, e.g. "[3, [4, 3], 3, 1, 0, [4, 1], 1, [4, 3]]"
        observation: String,
    },

    /// Print the canonical rotation and tile number of a six-edge code
    Canonicalize {
        /// Six color digits, e.g. 343141
        code: String,
    },

    /// List the tile catalog
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the color alphabet
    Colors,
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // Keep any subscriber that is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let format = match &cli.command {
        Commands::Identify { format, .. } => *format,
        _ => None,
    };
    merge_cli_overrides(&mut config, &CliOverrides { format, log_filter: cli.log_filter.clone() });

    init_logging(&config.logging.filter);

    match cli.command {
        Commands::Identify { input, shape, format: _, strict, output } => identify::run_identify(
            &input,
            shape,
            config.output.format,
            strict,
            output.as_deref(),
            &config.matching.patterns,
        ),
        Commands::Candidates { observation } => identify::run_candidates(&observation),
        Commands::Canonicalize { code } => identify::run_canonicalize(&code),
        Commands::Catalog { json } => info::run_catalog(json),
        Commands::Colors => info::run_colors(),
    }
}

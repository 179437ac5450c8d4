//! Configuration schema types for `tilecode.toml`
//!
//! Defines the structure and validation rules for identification settings.

use serde::{Deserialize, Serialize};

use crate::template::DEFAULT_TRIAL_PATTERNS;

/// Longest compact template that can expand to a full tile code
pub const MAX_PATTERN_LEN: usize = 6;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines and a summary
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Template matching section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Compact templates tried, in order, when no shape class is known
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self { patterns: default_patterns() }
    }
}

fn default_patterns() -> Vec<String> {
    DEFAULT_TRIAL_PATTERNS.iter().map(|p| p.to_string()).collect()
}

/// Output section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TilecodeConfig {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "matching.patterns[2]")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tilecode.toml: '{}' {}", self.field, self.message)
    }
}

impl TilecodeConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.matching.patterns.is_empty() {
            errors.push(ConfigValidationError {
                field: "matching.patterns".to_string(),
                message: "must contain at least one template".to_string(),
            });
        }

        for (i, pattern) in self.matching.patterns.iter().enumerate() {
            if pattern.is_empty() || pattern.len() > MAX_PATTERN_LEN {
                errors.push(ConfigValidationError {
                    field: format!("matching.patterns[{}]", i),
                    message: format!("must be 1 to {} letters long", MAX_PATTERN_LEN),
                });
            } else if !pattern.chars().all(|c| c.is_ascii_lowercase()) {
                errors.push(ConfigValidationError {
                    field: format!("matching.patterns[{}]", i),
                    message: "must contain only lowercase ASCII letters".to_string(),
                });
            }
        }

        if self.logging.filter.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "logging.filter".to_string(),
                message: "must be a non-empty filter directive".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

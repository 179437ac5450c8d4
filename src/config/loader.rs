//! Configuration loading and discovery for `tilecode.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{OutputFormat, TilecodeConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "tilecode.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse tilecode.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", bullet_list(.0))]
    Validation(Vec<String>),
}

fn bullet_list(errors: &[String]) -> String {
    errors.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n")
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub log_filter: Option<String>,
}

/// Find tilecode.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for tilecode.toml
/// 2. Check XDG_CONFIG_HOME/tilecode/tilecode.toml (or ~/.config/tilecode/tilecode.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find tilecode.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("tilecode").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find tilecode.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a tilecode.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// defaults.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use tilecode::config::load_config;
///
/// let config = load_config(Some(Path::new("tilecode.toml"))).unwrap();
/// println!("{:?}", config.matching.patterns);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<TilecodeConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(TilecodeConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<TilecodeConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: TilecodeConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut TilecodeConfig, overrides: &CliOverrides) {
    if let Some(format) = overrides.format {
        config.output.format = format;
    }

    if let Some(ref filter) = overrides.log_filter {
        config.logging.filter = filter.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &[u8]) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents)
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[output]\nformat = \"json\"");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"");

        let subdir = temp.path().join("crops").join("table_3");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            br#"
[matching]
patterns = ["abacbc"]

[output]
format = "json"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.matching.patterns, vec!["abacbc"]);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[matching]\npatterns = [\"ab1\"]");

        let result = load_config(Some(&config_path));
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("matching.patterns[0]"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides_format() {
        let mut config = TilecodeConfig::default();
        let overrides = CliOverrides { format: Some(OutputFormat::Json), ..Default::default() };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_merge_cli_overrides_empty_keeps_config() {
        let mut config = TilecodeConfig::default();
        config.output.format = OutputFormat::Json;

        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_cli_overrides_log_filter() {
        let mut config = TilecodeConfig::default();
        let overrides =
            CliOverrides { log_filter: Some("debug".to_string()), ..Default::default() };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.logging.filter, "debug");
    }
}

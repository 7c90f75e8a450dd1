//! Configuration Module
//!
//! This module defines the configuration structures for the `txcheck` tool.
//! Configuration is loaded from TOML files and parsed using serde. Every
//! section is optional and falls back to its defaults.

use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [logging]
/// filter = "info"
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Logging configuration
///
/// # Fields
/// - `filter`: `tracing_subscriber::EnvFilter` directive (e.g. `"info"` or
///   `"txcheck=debug"`). `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// How verdicts are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<source>: ok` or `<source>: <reason>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parses_sections() {
        let config = Config::parse(
            r#"
            [logging]
            filter = "txcheck=debug"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.filter, "txcheck=debug");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Config::parse("[output]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Config::load("does/not/exist.toml").is_err());
    }
}

//! Job configuration parsing and validation
//!
//! This module handles:
//! - Reading the job list from a JSON or TOML file
//! - Validating jobs and their filter patterns before anything runs

mod types;
mod validation;


use std::fs;
use std::path::Path;

use anyhow::Context;

pub use types::{ConfigFormat, Job, MigrationConfig};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "MigrationConfig.json";

/// Loads, parses and validates migration configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the job list from `path`
    ///
    /// The format follows the file extension: `.toml` is read as TOML and
    /// anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<MigrationConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content, ConfigFormat::from_path(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        ConfigValidator::validate(&config)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), jobs = config.jobs.len(), "Loaded migration config");

        Ok(config)
    }

    /// Parse configuration text in the given format without validating it
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration document.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<MigrationConfig> {
        let config: MigrationConfig = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let config = ConfigLoader::parse(
            r#"{"jobs": [{"title": "Photos", "from": "/in", "to": "/out", "filters": [".*\\.jpg"]}]}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert_eq!(config.jobs.len(), 1);
        assert_eq!(config.jobs[0].filters, vec![r".*\.jpg"]);
    }

    #[test]
    fn test_parse_toml() {
        let config = ConfigLoader::parse(
            r#"
[[jobs]]
title = "Docs"
source = "/in"
destination = "/out"
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.jobs.len(), 1);
        assert!(config.jobs[0].filters.is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(ConfigLoader::parse("{ not json", ConfigFormat::Json).is_err());
    }
}

//! Configuration types and structures

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A single configured migration task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Display name used in log messages
    pub title: String,

    /// Directory (or single file) to migrate from
    #[serde(alias = "from")]
    pub source: String,

    /// Directory to migrate into
    #[serde(alias = "to")]
    pub destination: String,

    /// Regular expressions a filename must fully match; empty accepts all
    #[serde(default)]
    pub filters: Vec<String>,
}

impl Job {
    /// Create a job without filters
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            destination: destination.into(),
            filters: Vec::new(),
        }
    }

    /// Replace the job's filter patterns
    #[must_use]
    pub fn with_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters = filters.into_iter().map(Into::into).collect();
        self
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MigrationConfig {
    /// Jobs in the order they run
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to JSON
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

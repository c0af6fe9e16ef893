//! Filename allow-list filtering with anchored regular expressions

use std::path::Path;

use anyhow::Context;
use regex::Regex;

use crate::error::Result;

/// Compiled allow-list of filename patterns.
///
/// An empty filter accepts everything. Otherwise a name must match at least
/// one pattern in full; a match on part of the name is not enough.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    patterns: Vec<Regex>,
}

impl FileFilter {
    /// Filter that accepts every filename
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a filter from pattern strings
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that is not a valid regex.
    pub fn with_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Self::compile(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(&format!("^(?:{pattern})$"))
            .with_context(|| format!("Invalid filter pattern: '{pattern}'"))
    }

    /// Whether no patterns are configured
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check a bare filename against the patterns
    #[must_use]
    pub fn accepts(&self, file_name: &str) -> bool {
        self.is_unrestricted() || self.patterns.iter().any(|p| p.is_match(file_name))
    }

    /// Check the final component of `path`
    #[must_use]
    pub fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.accepts(&name.to_string_lossy()))
    }
}

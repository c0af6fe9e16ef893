//! File timestamp comparison for determining recency

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::error::MigrateError;

/// Timestamp comparator.
///
/// Times are read from the filesystem on every call and never cached.
pub struct TimestampComparator;

impl TimestampComparator {
    /// Get the modification time of a file
    ///
    /// # Errors
    ///
    /// Returns an error if file metadata cannot be read.
    pub fn get_modified_time(path: &Path) -> Result<SystemTime, MigrateError> {
        fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| MigrateError::Metadata {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Compare modification times and return ordering of source relative to destination
    ///
    /// # Errors
    ///
    /// Returns an error if file metadata cannot be read.
    pub fn compare_times(source: &Path, destination: &Path) -> Result<Ordering, MigrateError> {
        let source_time = Self::get_modified_time(source)?;
        let dest_time = Self::get_modified_time(destination)?;

        Ok(source_time.cmp(&dest_time))
    }
}

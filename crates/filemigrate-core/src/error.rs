//! Error types for the migration engine.
//!
//! Job-level and configuration failures use `anyhow`. A failed move of a
//! single file is a [`MigrateError`]. The runner records it and goes on
//! with the remaining files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Failure while migrating a single file
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Modification time or metadata could not be read
    #[error("failed to read metadata for {}: {source}", .path.display())]
    Metadata {
        /// Path whose metadata was requested
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Existing destination file could not be removed
    #[error("failed to remove existing file {}: {source}", .path.display())]
    Remove {
        /// Destination that should have been removed
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Destination parent directory could not be created
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        /// Directory that should have been created
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Rename from source to destination failed
    #[error("failed to move {} -> {}: {source}", .from.display(), .to.display())]
    Rename {
        /// File being moved
        from: PathBuf,
        /// Target path
        to: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_error_message() {
        let err = MigrateError::Rename {
            from: PathBuf::from("src/a.txt"),
            to: PathBuf::from("dst/a.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let message = err.to_string();
        assert!(message.contains("src/a.txt"));
        assert!(message.contains("dst/a.txt"));
        assert!(message.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

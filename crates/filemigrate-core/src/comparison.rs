//! Destination conflict detection
//!
//! A conflict exists when something is already present at a candidate's
//! destination path. The modification times decide the outcome. A strictly
//! newer destination wins. Otherwise the source replaces it, so ties go to
//! the source.

mod timestamp;

use std::cmp::Ordering;
use std::path::Path;

pub use timestamp::TimestampComparator;

use crate::error::MigrateError;
use crate::log::EventLog;

/// Outcome of checking a candidate against its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Nothing exists at the destination
    NoConflict,
    /// Destination exists but is not newer; it will be replaced
    Replace,
    /// Destination is strictly newer; the candidate is skipped
    DestinationNewer,
}

impl ConflictResolution {
    /// Whether the candidate should be migrated
    #[must_use]
    pub const fn should_migrate(self) -> bool {
        !matches!(self, Self::DestinationNewer)
    }
}

/// Decides whether a candidate may overwrite its destination
pub struct ConflictResolver;

impl ConflictResolver {
    /// Compare a source file with whatever exists at `destination`
    ///
    /// # Errors
    ///
    /// Returns an error if either modification time cannot be read.
    pub fn resolve(source: &Path, destination: &Path) -> Result<ConflictResolution, MigrateError> {
        if !destination.exists() {
            return Ok(ConflictResolution::NoConflict);
        }

        match TimestampComparator::compare_times(source, destination)? {
            Ordering::Less => Ok(ConflictResolution::DestinationNewer),
            Ordering::Equal | Ordering::Greater => Ok(ConflictResolution::Replace),
        }
    }

    /// [`resolve`](Self::resolve) reduced to a yes/no, logging skipped
    /// candidates in verbose mode
    ///
    /// # Errors
    ///
    /// Returns an error if either modification time cannot be read.
    pub fn should_migrate(
        source: &Path,
        destination: &Path,
        log: EventLog<'_>,
    ) -> Result<bool, MigrateError> {
        let resolution = Self::resolve(source, destination)?;

        if resolution == ConflictResolution::DestinationNewer {
            log.detail(format_args!("Skipping outdated file: {}", source.display()));
        }

        Ok(resolution.should_migrate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryLog;
    use filetime::{FileTime, set_file_mtime};
    use std::fs;
    use tempfile::TempDir;

    fn write_with_mtime(path: &Path, content: &str, secs: i64) {
        fs::write(path, content).unwrap();
        set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
    }

    #[test]
    fn test_no_destination() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        write_with_mtime(&source, "src", 1_000);

        let resolution = ConflictResolver::resolve(&source, &tmp.path().join("missing.txt")).unwrap();
        assert_eq!(resolution, ConflictResolution::NoConflict);
        assert!(resolution.should_migrate());
    }

    #[test]
    fn test_destination_newer_is_kept() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src.txt");
        let dest = tmp.path().join("dst.txt");
        write_with_mtime(&source, "src", 1_000);
        write_with_mtime(&dest, "dst", 2_000);

        let sink = MemoryLog::new();
        let migrate = ConflictResolver::should_migrate(&source, &dest, EventLog::new(&sink, true)).unwrap();

        assert!(!migrate);
        assert!(sink.contains("Skipping outdated file"));
    }

    #[test]
    fn test_destination_older_is_replaced() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src.txt");
        let dest = tmp.path().join("dst.txt");
        write_with_mtime(&source, "src", 2_000);
        write_with_mtime(&dest, "dst", 1_000);

        let resolution = ConflictResolver::resolve(&source, &dest).unwrap();
        assert_eq!(resolution, ConflictResolution::Replace);
    }

    #[test]
    fn test_equal_times_source_wins() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src.txt");
        let dest = tmp.path().join("dst.txt");
        write_with_mtime(&source, "src", 1_500);
        write_with_mtime(&dest, "dst", 1_500);

        let sink = MemoryLog::new();
        let migrate = ConflictResolver::should_migrate(&source, &dest, EventLog::new(&sink, true)).unwrap();

        assert!(migrate);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_missing_source_with_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("dst.txt");
        write_with_mtime(&dest, "dst", 1_000);

        let result = ConflictResolver::resolve(&tmp.path().join("vanished.txt"), &dest);
        assert!(matches!(result, Err(MigrateError::Metadata { .. })));
    }
}

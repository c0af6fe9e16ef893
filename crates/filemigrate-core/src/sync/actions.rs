//! Per-file migration planning

use std::path::{Path, PathBuf};

/// A file that survived filtering and conflict checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Discovered source file
    pub source: PathBuf,
    /// Computed destination path
    pub destination: PathBuf,
}

/// What has to happen at the destination before the rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preparation {
    /// A file already sits at the destination and must be removed
    RemoveExisting,
    /// The destination's parent directory chain is missing
    CreateParent(PathBuf),
    /// Nothing to prepare
    Ready,
}

/// A single planned move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationAction {
    /// File being moved
    pub source: PathBuf,
    /// Where it ends up
    pub destination: PathBuf,
    /// Preparation step required first
    pub preparation: Preparation,
}

impl MigrationAction {
    /// Plan the move of `source` to `destination` against the current
    /// filesystem.
    ///
    /// `dir_exists` answers whether a directory is present; the executor
    /// substitutes its own view in dry-run mode.
    #[must_use]
    pub fn plan(source: &Path, destination: &Path, dir_exists: impl Fn(&Path) -> bool) -> Self {
        let preparation = if destination.exists() {
            Preparation::RemoveExisting
        } else {
            match destination.parent() {
                Some(parent) if !parent.as_os_str().is_empty() && !dir_exists(parent) => {
                    Preparation::CreateParent(parent.to_path_buf())
                }
                _ => Preparation::Ready,
            }
        };

        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            preparation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plan_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("a.txt");
        fs::write(&dest, "old").unwrap();

        let action = MigrationAction::plan(Path::new("src/a.txt"), &dest, Path::is_dir);
        assert_eq!(action.preparation, Preparation::RemoveExisting);
    }

    #[test]
    fn test_plan_missing_parent() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("new/deeper/a.txt");

        let action = MigrationAction::plan(Path::new("src/a.txt"), &dest, Path::is_dir);
        assert_eq!(
            action.preparation,
            Preparation::CreateParent(tmp.path().join("new/deeper"))
        );
    }

    #[test]
    fn test_plan_ready() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("a.txt");

        let action = MigrationAction::plan(Path::new("src/a.txt"), &dest, Path::is_dir);
        assert_eq!(action.preparation, Preparation::Ready);
        assert_eq!(action.destination, dest);
    }

    #[test]
    fn test_plan_uses_supplied_directory_view() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("planned/a.txt");

        let action = MigrationAction::plan(Path::new("src/a.txt"), &dest, |_| true);
        assert_eq!(action.preparation, Preparation::Ready);
    }
}

//! Filesystem side of a migration: removal, directory creation and rename

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::actions::{MigrationAction, Preparation};
use crate::error::MigrateError;
use crate::log::EventLog;

/// Moves files into place, or only logs what it would do in dry-run mode
pub struct Migrator {
    dry_run: bool,
    /// Directories a dry run has pretended to create
    planned_dirs: RefCell<HashSet<PathBuf>>,
}

impl Migrator {
    /// Create a new migrator
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            planned_dirs: RefCell::new(HashSet::new()),
        }
    }

    /// Move `source` to `destination`
    ///
    /// # Errors
    ///
    /// Returns an error if removing the old destination, creating the parent
    /// directory or the rename itself fails. Nothing is rolled back: a
    /// destination that was already removed stays removed.
    pub fn migrate(
        &self,
        source: &Path,
        destination: &Path,
        log: EventLog<'_>,
    ) -> Result<(), MigrateError> {
        let action = MigrationAction::plan(source, destination, |dir| self.dir_exists(dir));
        self.execute(&action, log)
    }

    /// Carry out a planned action
    ///
    /// # Errors
    ///
    /// Returns an error if any filesystem step fails.
    pub fn execute(&self, action: &MigrationAction, log: EventLog<'_>) -> Result<(), MigrateError> {
        match &action.preparation {
            Preparation::RemoveExisting => {
                log.info(format_args!(
                    "Removing existing file: {}",
                    action.destination.display()
                ));
                if !self.dry_run {
                    fs::remove_file(&action.destination).map_err(|source| MigrateError::Remove {
                        path: action.destination.clone(),
                        source,
                    })?;
                }
            }
            Preparation::CreateParent(parent) => {
                log.info(format_args!("Creating directory: {}", parent.display()));
                if self.dry_run {
                    self.planned_dirs.borrow_mut().insert(parent.clone());
                } else {
                    fs::create_dir_all(parent).map_err(|source| MigrateError::CreateDirectory {
                        path: parent.clone(),
                        source,
                    })?;
                }
            }
            Preparation::Ready => {}
        }

        log.info(format_args!(
            "Migrating: {} -> {}",
            action.source.display(),
            action.destination.display()
        ));

        if !self.dry_run {
            fs::rename(&action.source, &action.destination).map_err(|source| {
                MigrateError::Rename {
                    from: action.source.clone(),
                    to: action.destination.clone(),
                    source,
                }
            })?;
        }

        Ok(())
    }

    fn dir_exists(&self, dir: &Path) -> bool {
        if dir.is_dir() {
            return true;
        }
        // A dry run never creates directories, so later files in the same
        // run must see the ones it already announced
        self.dry_run
            && self
                .planned_dirs
                .borrow()
                .iter()
                .any(|planned| planned.starts_with(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryLog;
    use tempfile::TempDir;

    #[test]
    fn test_migrate_into_new_directory() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        fs::write(&source, "payload").unwrap();
        let dest = tmp.path().join("out/nested/a.txt");

        let sink = MemoryLog::new();
        Migrator::new(false)
            .migrate(&source, &dest, EventLog::new(&sink, false))
            .unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "payload");
        assert!(sink.contains("Creating directory"));
        assert!(sink.contains("Migrating: "));
    }

    #[test]
    fn test_migrate_replaces_existing() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        fs::write(&source, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        let sink = MemoryLog::new();
        Migrator::new(false)
            .migrate(&source, &dest, EventLog::new(&sink, false))
            .unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        assert!(sink.contains("Removing existing file"));
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let existing = tmp.path().join("b.txt");
        fs::write(&source, "new").unwrap();
        fs::write(&existing, "old").unwrap();

        let sink = MemoryLog::new();
        let migrator = Migrator::new(true);

        migrator
            .migrate(&source, &existing, EventLog::new(&sink, false))
            .unwrap();
        migrator
            .migrate(&source, &tmp.path().join("new/a.txt"), EventLog::new(&sink, false))
            .unwrap();

        assert_eq!(fs::read_to_string(&source).unwrap(), "new");
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
        assert!(!tmp.path().join("new").exists());
        assert!(sink.contains("Removing existing file"));
        assert!(sink.contains("Creating directory"));
    }

    #[test]
    fn test_dry_run_announces_each_directory_once() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        let sink = MemoryLog::new();
        let migrator = Migrator::new(true);
        let log = EventLog::new(&sink, false);
        migrator.migrate(&a, &tmp.path().join("out/a.txt"), log).unwrap();
        migrator.migrate(&b, &tmp.path().join("out/b.txt"), log).unwrap();

        let creates = sink
            .messages()
            .iter()
            .filter(|m| m.starts_with("Creating directory"))
            .count();
        assert_eq!(creates, 1);
    }

    #[test]
    fn test_missing_source_fails_rename() {
        let tmp = TempDir::new().unwrap();
        let sink = MemoryLog::new();

        let result = Migrator::new(false).migrate(
            &tmp.path().join("vanished.txt"),
            &tmp.path().join("dest.txt"),
            EventLog::new(&sink, false),
        );

        assert!(matches!(result, Err(MigrateError::Rename { .. })));
    }
}

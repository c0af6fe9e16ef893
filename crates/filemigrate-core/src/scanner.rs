//! File discovery for migration jobs
//!
//! Discovery walks a job's source path and collects regular files:
//! - a missing source yields nothing
//! - a file source yields itself
//! - a directory yields its files, descending into subdirectories only in
//!   recursive mode
//!
//! Symbolic links are never followed. Entries that cannot be read are
//! reported as skipped rather than failing the job.

mod filters;


use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use filters::FileFilter;

use crate::log::EventLog;

/// Why a directory entry was left out of discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Symbolic link (not followed)
    Symlink,
    /// Entry or directory could not be read
    Unreadable(String),
    /// Socket, FIFO, device or other non-regular file
    Special,
}

/// An entry that discovery treated as absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Path of the skipped entry
    pub path: PathBuf,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of a discovery pass
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Regular files found under the source path
    pub files: BTreeSet<PathBuf>,
    /// Entries treated as absent children
    pub skipped: Vec<SkippedEntry>,
}

/// Source tree walker
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    recursive: bool,
}

impl Scanner {
    /// Create a new scanner
    #[must_use]
    pub const fn new(recursive: bool) -> Self {
        Self { recursive }
    }

    /// Collect the regular files at or below `root`
    #[must_use]
    pub fn discover(&self, root: &Path, log: EventLog<'_>) -> Discovery {
        let mut discovery = Discovery::default();

        if !root.exists() {
            log.detail(format_args!("Source path not found: {}", root.display()));
            return discovery;
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(root)
            .follow_links(false)
            .max_depth(max_depth)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let skipped = unreadable_entry(root, e.path(), &e);
                    log.detail(format_args!(
                        "Skipping unreadable entry: {} ({e})",
                        skipped.path.display()
                    ));
                    discovery.skipped.push(skipped);
                    continue;
                }
            };

            let file_type = entry.file_type();

            if file_type.is_file() {
                log.detail(format_args!("Discovered file: {}", entry.path().display()));
                discovery.files.insert(entry.into_path());
            } else if file_type.is_dir() {
                // Depth 0 is the root itself; in flat mode walkdir stops at depth 1
                if entry.depth() > 0 && self.recursive {
                    log.detail(format_args!("Discovering directory: {}", entry.path().display()));
                }
            } else if file_type.is_symlink() {
                log.detail(format_args!("Skipping symbolic link: {}", entry.path().display()));
                discovery.skipped.push(SkippedEntry {
                    path: entry.into_path(),
                    reason: SkipReason::Symlink,
                });
            } else {
                log.detail(format_args!("Skipping special file: {}", entry.path().display()));
                discovery.skipped.push(SkippedEntry {
                    path: entry.into_path(),
                    reason: SkipReason::Special,
                });
            }
        }

        discovery
    }
}

/// Skipped entry for a traversal error. Errors without a path of their own
/// are attributed to the walk root.
fn unreadable_entry(root: &Path, path: Option<&Path>, error: &dyn fmt::Display) -> SkippedEntry {
    SkippedEntry {
        path: path.unwrap_or(root).to_path_buf(),
        reason: SkipReason::Unreadable(error.to_string()),
    }
}

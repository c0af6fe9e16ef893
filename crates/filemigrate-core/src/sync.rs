//! Migration engine
//!
//! Each job is normalized, discovered, filtered and conflict-checked, then
//! its surviving files are moved. Jobs run one at a time and share nothing.

mod actions;
mod executor;
mod orchestrator;
mod reporting;

pub use actions::{Candidate, MigrationAction, Preparation};
pub use executor::Migrator;
pub use orchestrator::{JobPhase, JobRunner, RunOptions};
pub use reporting::JobReporter;

/// Outcome of a single job run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    /// Job title
    pub title: String,
    /// Whether the job ran in test (dry-run) mode
    pub dry_run: bool,
    /// Last phase the job reached
    pub phase: JobPhase,
    /// Regular files found under the source
    pub discovered: usize,
    /// Entries skipped during discovery (symlinks, unreadable entries)
    pub skipped_entries: usize,
    /// Files rejected by the job's filters
    pub filtered: usize,
    /// Files skipped because the destination is newer
    pub outdated: usize,
    /// Files whose destination is the file itself
    pub in_place: usize,
    /// Files moved (or that would be moved, in test mode)
    pub migrated: usize,
    /// Per-file failures
    pub errors: Vec<String>,
}

impl JobReport {
    /// Empty report for a job about to start
    #[must_use]
    pub fn new(title: &str, dry_run: bool) -> Self {
        Self {
            title: title.to_string(),
            dry_run,
            phase: JobPhase::Normalizing,
            discovered: 0,
            skipped_entries: 0,
            filtered: 0,
            outdated: 0,
            in_place: 0,
            migrated: 0,
            errors: Vec::new(),
        }
    }

    /// Whether the job completed without per-file failures
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

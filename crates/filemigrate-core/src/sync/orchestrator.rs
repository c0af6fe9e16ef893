//! Job orchestration - runs each job through its phases in order

use std::fmt;
use std::path::{Path, PathBuf};

use super::JobReport;
use super::actions::Candidate;
use super::executor::Migrator;
use crate::comparison::ConflictResolver;
use crate::config::Job;
use crate::log::{EventLog, LogSink};
use crate::paths;
use crate::scanner::{FileFilter, Scanner};

/// Flags resolved once per invocation and shared by every job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunOptions {
    /// Descend into subdirectories of each source
    pub recursive: bool,
    /// Record per-file detail messages
    pub verbose: bool,
    /// Make every decision and log it, but leave the filesystem untouched
    pub dry_run: bool,
}

impl RunOptions {
    /// Create run options
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(recursive: bool, verbose: bool, dry_run: bool) -> Self {
        Self {
            recursive,
            verbose,
            dry_run,
        }
    }
}

/// Phases a job moves through, strictly in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JobPhase {
    /// Source and destination strings are normalized
    Normalizing,
    /// Candidate files are collected from the source
    Discovering,
    /// Candidates are checked against the job's filters
    Filtering,
    /// Candidates are checked against existing destination files
    ResolvingConflicts,
    /// Surviving candidates are moved
    Migrating,
    /// Job finished
    Done,
}

impl fmt::Display for JobPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normalizing => "normalizing",
            Self::Discovering => "discovering",
            Self::Filtering => "filtering",
            Self::ResolvingConflicts => "resolving conflicts",
            Self::Migrating => "migrating",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Runs migration jobs one after another
pub struct JobRunner<'a> {
    options: RunOptions,
    sink: &'a dyn LogSink,
}

impl<'a> JobRunner<'a> {
    /// Create a runner writing to `sink`
    #[must_use]
    pub const fn new(options: RunOptions, sink: &'a dyn LogSink) -> Self {
        Self { options, sink }
    }

    /// Run every job in order, returning one report per job
    #[must_use]
    pub fn run_all(&self, jobs: &[Job]) -> Vec<JobReport> {
        jobs.iter().map(|job| self.run(job)).collect()
    }

    /// Run a single job to completion.
    ///
    /// Per-file failures are logged and recorded in the report; they never
    /// stop the remaining files.
    #[must_use]
    pub fn run(&self, job: &Job) -> JobReport {
        let log = EventLog::new(self.sink, self.options.verbose);
        let mut report = JobReport::new(&job.title, self.options.dry_run);

        Self::enter(&mut report, JobPhase::Normalizing);
        let source = paths::normalize(&job.source);
        let destination = paths::normalize(&job.destination);
        log.detail(format_args!("Job {}: source {source}", job.title));
        log.detail(format_args!("Job {}: destination {destination}", job.title));
        let source_root = paths::walk_root(&source);
        let destination_root = paths::walk_root(&destination);

        Self::enter(&mut report, JobPhase::Discovering);
        let discovery = Scanner::new(self.options.recursive).discover(&source_root, log);
        report.discovered = discovery.files.len();
        report.skipped_entries = discovery.skipped.len();

        Self::enter(&mut report, JobPhase::Filtering);
        let filter = match FileFilter::with_patterns(job.filters.as_slice()) {
            Ok(filter) => filter,
            Err(e) => {
                let message = format!("Skipping migration job {}: {e:#}", job.title);
                log.info(&message);
                report.errors.push(message);
                Self::enter(&mut report, JobPhase::Done);
                return report;
            }
        };

        let mut accepted = Vec::with_capacity(discovery.files.len());
        for file in discovery.files {
            if filter.should_include(&file) {
                accepted.push(file);
            } else {
                log.detail(format_args!("Filtered out file: {}", file.display()));
                report.filtered += 1;
            }
        }

        Self::enter(&mut report, JobPhase::ResolvingConflicts);
        let candidates = Self::resolve_conflicts(accepted, &source_root, &destination_root, log, &mut report);

        Self::enter(&mut report, JobPhase::Migrating);
        if candidates.is_empty() {
            log.info(format_args!("No changes for migration job {}, skipping", job.title));
        } else {
            log.info(format_args!("Beginning migration job {}", job.title));

            let migrator = Migrator::new(self.options.dry_run);
            for candidate in &candidates {
                match migrator.migrate(&candidate.source, &candidate.destination, log) {
                    Ok(()) => report.migrated += 1,
                    Err(e) => {
                        let message = format!("Failed to migrate {}: {e}", candidate.source.display());
                        log.info(&message);
                        report.errors.push(message);
                    }
                }
            }

            log.info(format_args!("Finished migration job {}", job.title));
        }

        Self::enter(&mut report, JobPhase::Done);
        report
    }

    fn resolve_conflicts(
        files: Vec<PathBuf>,
        source_root: &Path,
        destination_root: &Path,
        log: EventLog<'_>,
        report: &mut JobReport,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::with_capacity(files.len());

        for file in files {
            let Some(destination) = paths::destination_for(&file, source_root, destination_root)
            else {
                let message = format!(
                    "Failed to compute destination for {}: not under {}",
                    file.display(),
                    source_root.display()
                );
                log.info(&message);
                report.errors.push(message);
                continue;
            };

            if paths::is_same_location(&file, &destination) {
                log.info(format_args!(
                    "Skipping file already at destination: {}",
                    file.display()
                ));
                report.in_place += 1;
                continue;
            }

            match ConflictResolver::should_migrate(&file, &destination, log) {
                Ok(true) => candidates.push(Candidate {
                    source: file,
                    destination,
                }),
                Ok(false) => report.outdated += 1,
                Err(e) => {
                    let message = format!("Failed to check conflict for {}: {e}", file.display());
                    log.info(&message);
                    report.errors.push(message);
                }
            }
        }

        candidates
    }

    fn enter(report: &mut JobReport, phase: JobPhase) {
        tracing::debug!(job = %report.title, %phase, "Entering phase");
        report.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_are_ordered() {
        assert!(JobPhase::Normalizing < JobPhase::Discovering);
        assert!(JobPhase::Discovering < JobPhase::Filtering);
        assert!(JobPhase::Filtering < JobPhase::ResolvingConflicts);
        assert!(JobPhase::ResolvingConflicts < JobPhase::Migrating);
        assert!(JobPhase::Migrating < JobPhase::Done);
    }

    #[test]
    fn test_run_options_default() {
        let options = RunOptions::default();
        assert_eq!(options, RunOptions::new(false, false, false));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(JobPhase::ResolvingConflicts.to_string(), "resolving conflicts");
    }
}

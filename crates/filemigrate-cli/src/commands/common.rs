//! Common types and utilities for command execution

use std::path::Path;

use filemigrate_core::RunOptions;

/// Execution context resolved from CLI flags
#[allow(clippy::struct_excessive_bools)]
pub struct RunContext<'a> {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Enable verbose output
    pub verbose: bool,
    /// Log decisions without changing files
    pub dry_run: bool,
    /// Path to the job configuration file
    pub config_path: &'a Path,
    /// Path to the migration log file
    pub log_path: &'a Path,
}

impl<'a> RunContext<'a> {
    /// Create a new run context
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(
        recursive: bool,
        verbose: bool,
        dry_run: bool,
        config_path: &'a Path,
        log_path: &'a Path,
    ) -> Self {
        Self {
            recursive,
            verbose,
            dry_run,
            config_path,
            log_path,
        }
    }

    /// Engine flags for this invocation
    #[must_use]
    pub const fn run_options(&self) -> RunOptions {
        RunOptions::new(self.recursive, self.verbose, self.dry_run)
    }
}

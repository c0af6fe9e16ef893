//! # filemigrate-core
//!
//! Core library for the filemigrate tool.
//!
//! This library moves files from configured source directories into
//! destination directories. Each job carries its own filename filters, and
//! conflicts at the destination are settled by modification time.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types shared across the engine
pub mod error;

/// Source and destination path normalization
pub mod paths;

/// Log sinks consumed by the engine
pub mod log;

/// File discovery and filename filtering
pub mod scanner;

/// Destination conflict detection
pub mod comparison;

/// Job configuration parsing and validation
pub mod config;

/// Job execution engine
pub mod sync;

pub use config::{ConfigLoader, Job, MigrationConfig};
pub use log::{LogSink, MemoryLog, MigrationLog};
pub use sync::{JobReport, JobReporter, JobRunner, RunOptions};

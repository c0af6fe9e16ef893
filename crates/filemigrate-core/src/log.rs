//! Log sinks for migration events
//!
//! The engine reports every decision as a plain text message through a
//! [`LogSink`]. The CLI writes those messages to a timestamped log file and
//! tests collect them in memory.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::Context;
use chrono::{SecondsFormat, Utc};

use crate::error::Result;

/// Default log file name, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "Migration.log";

/// Append-only receiver of migration log messages.
///
/// A message must be recorded by the time `write` returns.
pub trait LogSink {
    /// Record a single message
    fn write(&self, message: &str);
}

/// Handle passed through the engine that separates always-on events from
/// verbose-only detail.
#[derive(Clone, Copy)]
pub struct EventLog<'a> {
    sink: &'a dyn LogSink,
    verbose: bool,
}

impl<'a> EventLog<'a> {
    /// Wrap a sink
    #[must_use]
    pub const fn new(sink: &'a dyn LogSink, verbose: bool) -> Self {
        Self { sink, verbose }
    }

    /// Record a message unconditionally
    pub fn info(&self, message: impl fmt::Display) {
        self.sink.write(&message.to_string());
    }

    /// Record a message only in verbose mode
    pub fn detail(&self, message: impl fmt::Display) {
        if self.verbose {
            self.sink.write(&message.to_string());
        }
    }
}

/// File-backed log sink.
///
/// Each message is written as `<timestamp> >> <message>` and flushed
/// immediately. Messages are also forwarded to `tracing` at info level so
/// they reach the console subscriber. The file is flushed and closed when
/// the sink is dropped.
pub struct MigrationLog {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl MigrationLog {
    /// Open the log file, truncating any previous contents
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Flush and close the log file
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be written.
    pub fn close(self) -> Result<()> {
        let result = {
            let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
            writer.flush()
        };
        result.with_context(|| format!("Failed to flush log file: {}", self.path.display()))
    }

    fn format_line(message: &str) -> String {
        format!(
            "{} >> {message}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

impl LogSink for MigrationLog {
    fn write(&self, message: &str) {
        tracing::info!("{message}");

        let line = Self::format_line(message);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to write log file");
        }
    }
}

impl Drop for MigrationLog {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writer.flush() {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to flush log file");
        }
    }
}

/// In-memory log sink
#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty in-memory log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded message, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether any recorded message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|m| m.contains(needle))
    }
}

impl LogSink for MemoryLog {
    fn write(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

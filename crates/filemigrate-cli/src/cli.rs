use clap::{Parser, Subcommand};
use filemigrate_core::config::DEFAULT_CONFIG_FILE;
use filemigrate_core::log::DEFAULT_LOG_FILE;
use std::path::PathBuf;

/// Move files between directories according to a list of migration jobs
#[derive(Parser, Debug)]
#[command(name = "filemigrate")]
#[command(
    about = "Move files between directories according to a list of migration jobs",
    long_about = None,
    version
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Job configuration file (JSON, or TOML with a .toml extension)
    #[arg(short, long, global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Migration log file (overwritten on each run)
    #[arg(short, long, global = true, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Descend into subdirectories of each job's source
    #[arg(short, long, global = true)]
    pub recursive: bool,

    /// Log every discovered, filtered and skipped file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Test mode: log every decision without changing any files
    #[arg(short, long, global = true, visible_alias = "dry-run")]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Commands {
    /// Run every configured job in order (default)
    Run,

    /// Validate the configuration and list its jobs without moving anything
    Jobs,
}

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::RunContext;
use tracing_subscriber::EnvFilter;

/// Default tracing filter when `RUST_LOG` is not set
const DEFAULT_LOG_LEVEL: &str = "info";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    if cli.verbose {
        println!("Verbose mode enabled");
        println!("Recursive: {}", cli.recursive);
        println!("Test mode: {}", cli.test);
    }

    let context = RunContext::new(
        cli.recursive,
        cli.verbose,
        cli.test,
        &cli.config,
        &cli.log,
    );

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            commands::Run::execute(&context).context("Failed to execute run command")?;
        }
        Commands::Jobs => {
            commands::Jobs::execute(&context).context("Failed to execute jobs command")?;
        }
    }

    Ok(())
}

/// Install the console subscriber that mirrors migration log messages
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

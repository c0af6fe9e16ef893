use anyhow::Context;
use filemigrate_core::{ConfigLoader, JobReporter, JobRunner, MigrationLog};

use super::RunContext;

pub struct Run;

impl Run {
    pub fn execute(context: &RunContext<'_>) -> anyhow::Result<()> {
        // Config problems are fatal before any job touches the filesystem
        let config = ConfigLoader::load(context.config_path).context("Failed to load migration config")?;

        if context.verbose {
            println!("Config: {}", context.config_path.display());
            println!("Log file: {}", context.log_path.display());
            println!("Jobs: {}", config.jobs.len());
        }

        if context.dry_run {
            println!("Test mode: no files will be changed");
        }

        let log = MigrationLog::open(context.log_path)?;
        let runner = JobRunner::new(context.run_options(), &log);
        let reports = runner.run_all(&config.jobs);
        log.close()?;

        println!("{}", JobReporter::generate_run_summary(&reports));

        let failed = reports.iter().filter(|r| !r.is_success()).count();
        if failed > 0 {
            anyhow::bail!("{failed} job(s) completed with errors");
        }

        Ok(())
    }
}

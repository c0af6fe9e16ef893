use anyhow::Context;
use filemigrate_core::ConfigLoader;
use filemigrate_core::paths;

use super::RunContext;

pub struct Jobs;

impl Jobs {
    pub fn execute(context: &RunContext<'_>) -> anyhow::Result<()> {
        let config = ConfigLoader::load(context.config_path).context("Failed to load migration config")?;

        if config.jobs.is_empty() {
            println!("No jobs configured in {}", context.config_path.display());
            return Ok(());
        }

        println!("{} job(s) in {}:", config.jobs.len(), context.config_path.display());
        for (idx, job) in config.jobs.iter().enumerate() {
            println!("\n{}. {}", idx + 1, job.title);
            println!("   From:    {}", paths::normalize(&job.source));
            println!("   To:      {}", paths::normalize(&job.destination));
            if job.filters.is_empty() {
                println!("   Filters: (none, all files)");
            } else {
                println!("   Filters: {}", job.filters.join(", "));
            }
        }

        Ok(())
    }
}

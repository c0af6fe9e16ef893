//! Configuration validation and error reporting

use super::types::MigrationConfig;
use crate::error::Result;
use crate::scanner::FileFilter;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any job has an empty title, source or
    /// destination, or a filter that is empty or not a valid regex.
    pub fn validate(config: &MigrationConfig) -> Result<()> {
        for (idx, job) in config.jobs.iter().enumerate() {
            let number = idx + 1;

            if job.title.trim().is_empty() {
                anyhow::bail!("Job #{number} has no title");
            }

            if job.source.trim().is_empty() {
                anyhow::bail!("Job #{number} ({}) has an empty source path", job.title);
            }

            if job.destination.trim().is_empty() {
                anyhow::bail!("Job #{number} ({}) has an empty destination path", job.title);
            }

            if job.filters.iter().any(|f| f.is_empty()) {
                anyhow::bail!("Job #{number} ({}) has an empty filter", job.title);
            }

            if let Err(e) = FileFilter::with_patterns(job.filters.as_slice()) {
                anyhow::bail!("Job #{number} ({}): {e}", job.title);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Job;

    fn config_with(job: Job) -> MigrationConfig {
        MigrationConfig { jobs: vec![job] }
    }

    #[test]
    fn test_validate_empty_config() {
        let config = MigrationConfig::default();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = config_with(Job::new("Docs", "/in", "/out").with_filters([r".*\.pdf"]));
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let result = ConfigValidator::validate(&config_with(Job::new("  ", "/in", "/out")));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("has no title"));
    }

    #[test]
    fn test_validate_empty_paths() {
        let result = ConfigValidator::validate(&config_with(Job::new("Docs", "", "/out")));
        assert!(result.unwrap_err().to_string().contains("empty source path"));

        let result = ConfigValidator::validate(&config_with(Job::new("Docs", "/in", " ")));
        assert!(result.unwrap_err().to_string().contains("empty destination path"));
    }

    #[test]
    fn test_validate_empty_filter() {
        let config = config_with(Job::new("Docs", "/in", "/out").with_filters([""]));
        let result = ConfigValidator::validate(&config);

        assert!(result.unwrap_err().to_string().contains("has an empty filter"));
    }

    #[test]
    fn test_validate_invalid_regex() {
        let config = config_with(Job::new("Docs", "/in", "/out").with_filters(["[a-"]));
        let message = ConfigValidator::validate(&config).unwrap_err().to_string();

        assert!(message.contains("Job #1 (Docs)"));
        assert!(message.contains("Invalid filter pattern"));
    }
}

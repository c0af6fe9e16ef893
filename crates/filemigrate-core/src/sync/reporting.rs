//! Job outcome reporting and statistics

use std::fmt::Write;

use super::JobReport;

/// Job outcome reporter
pub struct JobReporter;

impl JobReporter {
    /// Generate a summary report for one job
    #[must_use]
    pub fn generate_summary(report: &JobReport) -> String {
        let mut output = String::new();

        let mode = if report.dry_run { " (test mode)" } else { "" };
        let _ = writeln!(output, "\n=== {}{mode} ===", report.title);
        let _ = writeln!(output, "Discovered: {}", report.discovered);
        let _ = writeln!(output, "Migrated:   {}", report.migrated);
        let _ = writeln!(output, "Filtered:   {}", report.filtered);
        let _ = writeln!(output, "Outdated:   {}", report.outdated);
        if report.in_place > 0 {
            let _ = writeln!(output, "In place:   {}", report.in_place);
        }
        if report.skipped_entries > 0 {
            let _ = writeln!(output, "Skipped:    {}", report.skipped_entries);
        }

        if !report.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", report.errors.len());
            for error in &report.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        if !report.is_success() {
            output.push_str("Status: ✗ Completed with errors\n");
        } else if report.migrated == 0 {
            output.push_str("Status: ✓ No changes\n");
        } else {
            output.push_str("Status: ✓ Success\n");
        }

        output
    }

    /// Generate a summary for several jobs followed by run totals
    #[must_use]
    pub fn generate_run_summary(reports: &[JobReport]) -> String {
        let mut output: String = reports.iter().map(Self::generate_summary).collect();

        let migrated: usize = reports.iter().map(|r| r.migrated).sum();
        let failed: usize = reports.iter().map(|r| r.errors.len()).sum();
        let _ = writeln!(
            output,
            "\nTotal: {} job(s), {migrated} file(s) migrated, {failed} error(s)",
            reports.len()
        );

        output
    }
}

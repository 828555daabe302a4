use crate::domain::{current_streak, StreakThresholds, WeekSummary};
use crate::report::stats::calculate_history_stats;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Build the markdown report for the archive
pub fn render_report(
    history: &[WeekSummary],
    thresholds: &StreakThresholds,
    generated_on: NaiveDate,
) -> String {
    let stats = calculate_history_stats(history, thresholds);
    let mut report = String::new();

    report.push_str(&format!("# Job Search Report - {}\n\n", generated_on));

    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Weeks Archived:** {}\n", stats.weeks));
    report.push_str(&format!(
        "- **Streak:** {} qualifying week(s) ({}+ applications, {}+ networking contacts or {}+ interviews)\n",
        current_streak(history, thresholds),
        thresholds.applications,
        thresholds.networking_contacts,
        thresholds.interviews
    ));
    report.push_str(&format!(
        "- **Average Completion:** {}\n",
        format_percent(stats.avg_completion_percent)
    ));
    report.push_str(&format!(
        "- **Totals:** {} applications, {} networking contacts, {} interviews\n",
        stats.total_applications, stats.total_networking_contacts, stats.total_interviews
    ));
    if let Some((date, percent)) = stats.best_week {
        report.push_str(&format!("- **Best Week:** {} ({}%)\n", date, percent));
    }
    report.push('\n');

    report.push_str("## Weeks\n\n");
    if history.is_empty() {
        report.push_str("_No weeks archived yet._\n");
        return report;
    }

    report.push_str("| Archived | Completion | Applications | Networking | Interviews | Qualifies |\n");
    report.push_str("|---|---|---|---|---|---|\n");
    for summary in history {
        report.push_str(&format!(
            "| {} | {}% | {} | {} | {} | {} |\n",
            summary.archived_at,
            summary.completion_percent,
            summary.applications,
            summary.networking_contacts,
            summary.interviews,
            if thresholds.is_met_by(summary) { "yes" } else { "no" }
        ));
    }

    report
}

/// Write the report to `output_path`
pub fn generate_report(
    history: &[WeekSummary],
    thresholds: &StreakThresholds,
    generated_on: NaiveDate,
    output_path: &Path,
) -> Result<()> {
    let report = render_report(history, thresholds, generated_on);
    crate::persistence::atomic_write(output_path, &report)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    tracing::info!(path = %output_path.display(), weeks = history.len(), "wrote report");
    Ok(())
}

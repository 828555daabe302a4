use crate::domain::{StreakThresholds, WeekSummary};
use chrono::NaiveDate;

/// Aggregate statistics over archived weeks
#[derive(Debug, PartialEq)]
pub struct HistoryStats {
    pub weeks: usize,
    pub qualifying_weeks: usize,
    pub avg_completion_percent: f64,
    pub total_applications: u64,
    pub total_networking_contacts: u64,
    pub total_interviews: u64,
    pub best_week: Option<(NaiveDate, u8)>,
}

/// Calculate statistics across the archive
pub fn calculate_history_stats(
    history: &[WeekSummary],
    thresholds: &StreakThresholds,
) -> HistoryStats {
    let weeks = history.len();

    let mut total_applications = 0;
    let mut total_networking_contacts = 0;
    let mut total_interviews = 0;
    let mut completion_sum = 0u64;
    let mut qualifying_weeks = 0;
    let mut best_week: Option<(NaiveDate, u8)> = None;

    for summary in history {
        total_applications += summary.applications as u64;
        total_networking_contacts += summary.networking_contacts as u64;
        total_interviews += summary.interviews as u64;
        completion_sum += summary.completion_percent as u64;

        if thresholds.is_met_by(summary) {
            qualifying_weeks += 1;
        }

        // Newest first, so ties keep the most recent week
        match best_week {
            Some((_, best)) if summary.completion_percent <= best => {}
            _ => best_week = Some((summary.archived_at, summary.completion_percent)),
        }
    }

    let avg_completion_percent = if weeks > 0 {
        completion_sum as f64 / weeks as f64
    } else {
        0.0
    };

    HistoryStats {
        weeks,
        qualifying_weeks,
        avg_completion_percent,
        total_applications,
        total_networking_contacts,
        total_interviews,
        best_week,
    }
}

use super::progress::completion_percent;
use super::week::{DayPlan, TaskKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion flag per task of the active week; missing keys mean "not done"
pub type CompletionState = BTreeMap<TaskKey, bool>;

/// Archived record of one past week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    pub archived_at: NaiveDate,
    pub completion_percent: u8,
    pub applications: u32,
    pub networking_contacts: u32,
    pub interviews: u32,
}

/// Outcome counts entered by hand when closing a week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualTotals {
    pub applications: u32,
    pub networking_contacts: u32,
    pub interviews: u32,
}

impl ManualTotals {
    /// Build totals from raw text fields; anything unusable counts as zero
    pub fn from_inputs(applications: &str, networking_contacts: &str, interviews: &str) -> Self {
        Self {
            applications: coerce_count(applications),
            networking_contacts: coerce_count(networking_contacts),
            interviews: coerce_count(interviews),
        }
    }
}

/// Parse a non-negative count, falling back to 0 for empty, negative or non-numeric text.
/// Fractional input is truncated.
pub fn coerce_count(input: &str) -> u32 {
    let input = input.trim();
    if let Ok(value) = input.parse::<u32>() {
        return value;
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Everything persisted for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub checked: CompletionState,
    pub history: Vec<WeekSummary>,
}

impl DashboardState {
    pub fn is_checked(&self, key: TaskKey) -> bool {
        self.checked.get(&key).copied().unwrap_or(false)
    }

    /// Flip one task's completion flag and return the new value.
    /// Mutates in place; only the event loop owns a mutable reference.
    pub fn toggle(&mut self, key: TaskKey) -> bool {
        let value = !self.is_checked(key);
        self.checked.insert(key, value);
        value
    }

    /// Close the current week: snapshot it at the front of the history and clear completion
    pub fn archive(
        &mut self,
        week: &[DayPlan],
        totals: ManualTotals,
        archived_at: NaiveDate,
    ) -> &WeekSummary {
        let summary = WeekSummary {
            archived_at,
            completion_percent: completion_percent(week, &self.checked),
            applications: totals.applications,
            networking_contacts: totals.networking_contacts,
            interviews: totals.interviews,
        };

        self.history.insert(0, summary);
        self.checked.clear();
        &self.history[0]
    }
}

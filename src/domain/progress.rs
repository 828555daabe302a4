use super::state::{CompletionState, WeekSummary};
use super::week::{DayPlan, TaskKey, Weekday};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Minimum outcomes for an archived week to count towards the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakThresholds {
    pub applications: u32,
    pub networking_contacts: u32,
    pub interviews: u32,
}

impl Default for StreakThresholds {
    fn default() -> Self {
        Self {
            applications: 10,
            networking_contacts: 3,
            interviews: 2,
        }
    }
}

impl StreakThresholds {
    /// A week qualifies when any one of the outcomes reaches its threshold
    pub fn is_met_by(&self, summary: &WeekSummary) -> bool {
        summary.applications >= self.applications
            || summary.networking_contacts >= self.networking_contacts
            || summary.interviews >= self.interviews
    }
}

fn is_checked(completion: &CompletionState, day: &DayPlan, index: usize) -> bool {
    TaskKey::try_new(day.day, index)
        .and_then(|key| completion.get(&key).copied())
        .unwrap_or(false)
}

/// Percentage of the week's tasks that are checked, rounded half up.
/// A week without tasks is 0% complete.
pub fn completion_percent(week: &[DayPlan], completion: &CompletionState) -> u8 {
    let total: usize = week.iter().map(|day| day.tasks.len()).sum();
    if total == 0 {
        return 0;
    }

    let done = week
        .iter()
        .flat_map(|day| day.task_keys())
        .filter(|key| completion.get(key).copied().unwrap_or(false))
        .count();

    ((200 * done + total) / (2 * total)) as u8
}

/// Total estimated minutes for one day, saturating at `u32::MAX`
pub fn day_total_minutes(day: &DayPlan) -> u32 {
    day.tasks
        .iter()
        .map(|task| task.estimated_minutes)
        .fold(0, u32::saturating_add)
}

/// Total estimated minutes for the whole week, saturating at `u32::MAX`
pub fn week_total_minutes(week: &[DayPlan]) -> u32 {
    week.iter().map(day_total_minutes).fold(0, u32::saturating_add)
}

/// True when every task of the day is checked (vacuously true for an empty day)
pub fn is_day_complete(day: &DayPlan, completion: &CompletionState) -> bool {
    (0..day.tasks.len()).all(|i| is_checked(completion, day, i))
}

/// Number of tasks of the day that are checked
pub fn day_done_count(day: &DayPlan, completion: &CompletionState) -> usize {
    (0..day.tasks.len())
        .filter(|i| is_checked(completion, day, *i))
        .count()
}

/// The plan for `date`, if it falls on a weekday of this week
pub fn today_plan(week: &[DayPlan], date: NaiveDate) -> Option<&DayPlan> {
    let day = Weekday::from_chrono(date.weekday())?;
    week.iter().find(|plan| plan.day == day && plan.date == date)
}

/// Whether today's tasks are all done; weekends never count as complete
pub fn is_today_complete(week: &[DayPlan], completion: &CompletionState, today: NaiveDate) -> bool {
    today_plan(week, today)
        .map(|plan| is_day_complete(plan, completion))
        .unwrap_or(false)
}

/// Count of archived weeks meeting the thresholds.
/// This is a lifetime count, not a run of consecutive weeks.
pub fn current_streak(history: &[WeekSummary], thresholds: &StreakThresholds) -> usize {
    history
        .iter()
        .filter(|summary| thresholds.is_met_by(summary))
        .count()
}

/// Outcome counts per archived week, oldest first, for charting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeSeries {
    pub applications: Vec<u64>,
    pub networking_contacts: Vec<u64>,
    pub interviews: Vec<u64>,
}

impl OutcomeSeries {
    /// Largest value across the three series
    pub fn max_value(&self) -> u64 {
        self.applications
            .iter()
            .chain(&self.networking_contacts)
            .chain(&self.interviews)
            .copied()
            .max()
            .unwrap_or(0)
    }
}

pub fn outcome_series(history: &[WeekSummary]) -> OutcomeSeries {
    let mut series = OutcomeSeries::default();
    for summary in history.iter().rev() {
        series.applications.push(summary.applications as u64);
        series
            .networking_contacts
            .push(summary.networking_contacts as u64);
        series.interviews.push(summary.interviews as u64);
    }
    series
}

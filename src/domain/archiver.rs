use super::state::{DashboardState, ManualTotals, WeekSummary};
use super::week::DayPlan;
use chrono::NaiveDate;

/// Labels for the manual entry fields, in field order
pub const FIELD_LABELS: [&str; 3] = ["Applications", "Networking contacts", "Interviews"];

/// Manual-entry buffers for closing out a week
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryArchiver {
    pub applications: String,
    pub networking_contacts: String,
    pub interviews: String,
    /// Focused field: 0 = applications, 1 = networking contacts, 2 = interviews
    pub editing_field: usize,
}

impl HistoryArchiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.applications,
            1 => &self.networking_contacts,
            _ => &self.interviews,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.editing_field {
            0 => &mut self.applications,
            1 => &mut self.networking_contacts,
            _ => &mut self.interviews,
        }
    }

    pub fn next_field(&mut self) {
        self.editing_field = (self.editing_field + 1) % FIELD_LABELS.len();
    }

    pub fn previous_field(&mut self) {
        self.editing_field = (self.editing_field + FIELD_LABELS.len() - 1) % FIELD_LABELS.len();
    }

    pub fn push_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Totals as currently typed, unusable text counts as zero
    pub fn totals(&self) -> ManualTotals {
        ManualTotals::from_inputs(&self.applications, &self.networking_contacts, &self.interviews)
    }

    /// Archive the current week with the typed totals, then empty the buffers
    pub fn archive(
        &mut self,
        state: &mut DashboardState,
        week: &[DayPlan],
        today: NaiveDate,
    ) -> WeekSummary {
        let summary = state.archive(week, self.totals(), today).clone();
        *self = Self::default();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::week::{build_week, TaskKey, WeekTemplate, Weekday};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn type_text(archiver: &mut HistoryArchiver, text: &str) {
        for c in text.chars() {
            archiver.push_char(c);
        }
    }

    #[test]
    fn test_archive_resets_buffers() {
        let week = build_week(&WeekTemplate::default(), today());
        let mut state = DashboardState::default();
        state.toggle(TaskKey::new(Weekday::Fri, 0));

        let mut archiver = HistoryArchiver::new();
        type_text(&mut archiver, "12");
        archiver.next_field();
        type_text(&mut archiver, "3");
        archiver.next_field();
        type_text(&mut archiver, "1");

        let summary = archiver.archive(&mut state, &week, today());

        assert_eq!(summary.applications, 12);
        assert_eq!(summary.networking_contacts, 3);
        assert_eq!(summary.interviews, 1);
        assert_eq!(summary.archived_at, today());
        assert_eq!(archiver, HistoryArchiver::default());
        assert_eq!(state.history.len(), 1);
        assert!(state.checked.is_empty());
    }

    #[test]
    fn test_non_numeric_input_archives_as_zero() {
        let week = build_week(&WeekTemplate::default(), today());
        let mut state = DashboardState::default();
        let mut archiver = HistoryArchiver::new();
        type_text(&mut archiver, "lots");

        let summary = archiver.archive(&mut state, &week, today());

        assert_eq!(summary.applications, 0);
        assert_eq!(summary.networking_contacts, 0);
        assert_eq!(summary.interviews, 0);
    }

    #[test]
    fn test_field_navigation_and_backspace() {
        let mut archiver = HistoryArchiver::new();
        archiver.previous_field();
        assert_eq!(archiver.editing_field, 2);
        type_text(&mut archiver, "45");
        archiver.backspace();
        assert_eq!(archiver.field(2), "4");
        archiver.next_field();
        assert_eq!(archiver.editing_field, 0);
        archiver.backspace();
        assert_eq!(archiver.field(0), "");
    }
}

use crate::clock::Clock;
use crate::domain::{
    build_week, completion_percent, current_streak, is_today_complete, today_plan, DashboardState,
    DayPlan, HistoryArchiver, ShutdownAdvisor, TaskKey, UiMode, View, WeekSummary,
};
use crate::notifications;
use crate::persistence::{Config, KeyValueStore, ProgressStore};
use crate::ticker::IntervalTimer;
use chrono::NaiveDate;
use std::time::Instant;

/// Values the view renders besides the raw state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub percent: u8,
    pub streak: usize,
    pub today_complete: bool,
    pub show_shutdown: bool,
}

/// Main application state
pub struct AppState {
    pub config: Config,
    pub state: DashboardState,
    pub week: Vec<DayPlan>,
    pub today: NaiveDate,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub view: View,
    pub archiver: HistoryArchiver,
    pub show_shutdown: bool,
    pub status_message: Option<String>,
    pub history_scroll_offset: usize,
    advisor: ShutdownAdvisor,
    shutdown_timer: IntervalTimer,
    store: ProgressStore<Box<dyn KeyValueStore>>,
    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, backend: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        let store = ProgressStore::new(backend, config.storage_key.clone());
        let state = store.load();
        let advisor = config.shutdown_advisor();
        let today = clock.today_in(advisor.zone);
        let week = build_week(&config.week, today);
        let shutdown_timer = IntervalTimer::new(config.shutdown_interval());

        let mut app = Self {
            config,
            state,
            week,
            today,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            view: View::Week,
            archiver: HistoryArchiver::new(),
            show_shutdown: false,
            status_message: None,
            history_scroll_offset: 0,
            advisor,
            shutdown_timer,
            store,
            clock,
        };
        app.show_shutdown = app.evaluate_shutdown();
        app
    }

    /// Start periodic shutdown checks for a freshly mounted view
    pub fn start_view(&mut self, now: Instant) {
        self.shutdown_timer.arm(now);
    }

    /// Stop periodic checks when the view goes away
    pub fn stop_view(&mut self) {
        self.shutdown_timer.cancel();
    }

    #[cfg(test)]
    pub fn is_view_running(&self) -> bool {
        self.shutdown_timer.is_armed()
    }

    /// Called on every loop iteration
    pub fn tick(&mut self, now: Instant) {
        if self.shutdown_timer.poll(now) {
            self.refresh_today();
            self.refresh_shutdown();
        }
    }

    /// Rebuild the week's dates if the calendar date moved on
    fn refresh_today(&mut self) {
        let today = self.clock.today_in(self.advisor.zone);
        if today != self.today {
            tracing::info!(from = %self.today, to = %today, "date changed, rebuilding week");
            self.today = today;
            self.week = build_week(&self.config.week, today);
            self.clamp_selection();
        }
    }

    fn evaluate_shutdown(&self) -> bool {
        let done = is_today_complete(&self.week, &self.state.checked, self.today);
        self.advisor.evaluate(done, self.clock.as_ref())
    }

    /// Re-evaluate the stop-working cue against the current state and clock
    pub fn refresh_shutdown(&mut self) {
        let show = self.evaluate_shutdown();
        if show && !self.show_shutdown {
            tracing::info!("shutdown cue on");
            notifications::notify_shutdown("You've done enough for today. Time to log off.");
        }
        self.show_shutdown = show;
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            percent: self.percent(),
            streak: self.streak(),
            today_complete: is_today_complete(&self.week, &self.state.checked, self.today),
            show_shutdown: self.show_shutdown,
        }
    }

    pub fn percent(&self) -> u8 {
        completion_percent(&self.week, &self.state.checked)
    }

    pub fn streak(&self) -> usize {
        current_streak(&self.state.history, &self.config.streak_thresholds)
    }

    pub fn today_plan(&self) -> Option<&DayPlan> {
        today_plan(&self.week, self.today)
    }

    /// Every task key of the week in display order
    pub fn task_keys(&self) -> Vec<TaskKey> {
        self.week.iter().flat_map(|day| day.task_keys()).collect()
    }

    pub fn selected_key(&self) -> Option<TaskKey> {
        self.task_keys().get(self.selected_index).copied()
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let count = self.task_keys().len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.task_keys().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    pub fn is_task_in_week(&self, key: TaskKey) -> bool {
        self.week.iter().any(|day| {
            day.day.index() == key.day_index && (key.task_index as usize) < day.tasks.len()
        })
    }

    /// Flip a task of the current week and persist. None if the key isn't part of this week.
    pub fn toggle(&mut self, key: TaskKey) -> Option<bool> {
        if !self.is_task_in_week(key) {
            tracing::debug!(%key, "ignoring toggle for task outside the week");
            return None;
        }
        let value = self.state.toggle(key);
        tracing::debug!(%key, checked = value, "toggled task");
        self.persist();
        self.refresh_shutdown();
        Some(value)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            self.toggle(key);
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        self.history_scroll_offset = 0;
    }

    pub fn open_archive_form(&mut self) {
        self.ui_mode = UiMode::ArchiveForm;
    }

    /// Close the form, keeping whatever was typed
    pub fn cancel_archive_form(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Archive the week with the form's totals and start a new one
    pub fn submit_archive(&mut self) -> WeekSummary {
        let summary = self
            .archiver
            .archive(&mut self.state, &self.week, self.today);
        tracing::info!(
            percent = summary.completion_percent,
            applications = summary.applications,
            networking = summary.networking_contacts,
            interviews = summary.interviews,
            "archived week"
        );
        self.ui_mode = UiMode::Normal;
        self.selected_index = 0;
        self.persist();
        self.refresh_shutdown();
        summary
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll_offset = self.history_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_history_down(&mut self) {
        if self.history_scroll_offset + 1 < self.state.history.len() {
            self.history_scroll_offset += 1;
        }
    }

    /// Save the state; failures are reported but never stop the app
    pub fn persist(&mut self) {
        match self.store.save(&self.state) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                tracing::warn!(error = ?e, "failed to save dashboard state");
                self.status_message = Some(format!("Not saved: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::Weekday;
    use crate::error::StoreError;
    use crate::persistence::MemoryStore;
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Clock whose time the test can move
    struct SharedClock(Rc<Cell<DateTime<Utc>>>);

    impl Clock for SharedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "read-only"),
            })
        }
    }

    /// Wednesday 2026-10-14, 10:00 in New York
    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 14, 0, 0).unwrap()
    }

    fn create_test_app() -> AppState {
        AppState::new(
            Config::default(),
            Box::new(MemoryStore::default()),
            Box::new(FixedClock(morning())),
        )
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.week.len(), 5);
        assert_eq!(app.today, NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        assert_eq!(app.task_keys().len(), 13);
        assert_eq!(app.summary().percent, 0);
        assert!(!app.show_shutdown);
        assert_eq!(app.today_plan().map(|p| p.day), Some(Weekday::Wed));
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..20 {
            app.move_selection_down();
        }
        assert_eq!(app.selected_index, 12);
        assert_eq!(app.selected_key(), Some(TaskKey::new(Weekday::Fri, 1)));
    }

    #[test]
    fn test_toggle_persists_and_updates_percent() {
        let mut app = create_test_app();
        app.toggle_selected();

        assert!(app.state.is_checked(TaskKey::new(Weekday::Mon, 0)));
        assert_eq!(app.percent(), 8);
        assert_eq!(app.store.load(), app.state);
    }

    #[test]
    fn test_toggle_outside_week_is_ignored() {
        let mut app = create_test_app();
        assert_eq!(app.toggle(TaskKey::new(Weekday::Wed, 9)), None);
        assert!(app.state.checked.is_empty());
    }

    #[test]
    fn test_wide_task_index_does_not_alias_first_task() {
        let mut app = create_test_app();
        assert_eq!(TaskKey::try_new(Weekday::Mon, 65536), None);

        let last = TaskKey::new(Weekday::Mon, u16::MAX);
        assert!(!app.is_task_in_week(last));
        assert_eq!(app.toggle(last), None);
        assert!(!app.state.is_checked(TaskKey::new(Weekday::Mon, 0)));
    }

    #[test]
    fn test_completing_today_shows_shutdown() {
        let mut app = create_test_app();
        app.toggle(TaskKey::new(Weekday::Wed, 0));
        assert!(!app.show_shutdown);
        app.toggle(TaskKey::new(Weekday::Wed, 1));
        assert!(app.show_shutdown);
        assert!(app.summary().today_complete);
    }

    #[test]
    fn test_timer_observes_current_clock() {
        let time = Rc::new(Cell::new(morning()));
        let mut app = AppState::new(
            Config::default(),
            Box::new(MemoryStore::default()),
            Box::new(SharedClock(time.clone())),
        );
        let start = Instant::now();
        app.start_view(start);
        app.tick(start);
        assert!(!app.show_shutdown);

        // 19:30 in New York, but the next tick isn't due yet
        time.set(Utc.with_ymd_and_hms(2026, 10, 14, 23, 30, 0).unwrap());
        app.tick(start + Duration::from_secs(30));
        assert!(!app.show_shutdown);

        app.tick(start + Duration::from_secs(60));
        assert!(app.show_shutdown);
    }

    #[test]
    fn test_stopped_view_does_not_tick() {
        let time = Rc::new(Cell::new(morning()));
        let mut app = AppState::new(
            Config::default(),
            Box::new(MemoryStore::default()),
            Box::new(SharedClock(time.clone())),
        );
        let start = Instant::now();
        app.start_view(start);
        app.tick(start);
        app.stop_view();
        assert!(!app.is_view_running());

        time.set(Utc.with_ymd_and_hms(2026, 10, 14, 23, 30, 0).unwrap());
        app.tick(start + Duration::from_secs(600));
        assert!(!app.show_shutdown);

        // Remounting re-arms with an immediate check
        app.start_view(start + Duration::from_secs(601));
        app.tick(start + Duration::from_secs(601));
        assert!(app.show_shutdown);
    }

    #[test]
    fn test_tick_rebuilds_week_on_new_date() {
        let time = Rc::new(Cell::new(morning()));
        let mut app = AppState::new(
            Config::default(),
            Box::new(MemoryStore::default()),
            Box::new(SharedClock(time.clone())),
        );
        let start = Instant::now();
        app.start_view(start);

        // Monday of the following week
        time.set(Utc.with_ymd_and_hms(2026, 10, 19, 14, 0, 0).unwrap());
        app.tick(start);

        assert_eq!(app.today, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(app.week[0].date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    }

    #[test]
    fn test_submit_archive() {
        let mut app = create_test_app();
        app.toggle(TaskKey::new(Weekday::Mon, 0));
        app.open_archive_form();
        app.archiver.applications = "12".to_string();
        app.archiver.interviews = "x".to_string();

        let summary = app.submit_archive();

        assert_eq!(summary.applications, 12);
        assert_eq!(summary.interviews, 0);
        assert_eq!(summary.completion_percent, 8);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.archiver, HistoryArchiver::default());
        assert!(app.state.checked.is_empty());
        assert_eq!(app.streak(), 1);
        assert_eq!(app.store.load().history.len(), 1);
    }

    #[test]
    fn test_cancel_archive_keeps_buffers() {
        let mut app = create_test_app();
        app.open_archive_form();
        app.archiver.push_char('4');
        app.cancel_archive_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.archiver.applications, "4");
        assert!(app.state.history.is_empty());
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut app = AppState::new(
            Config::default(),
            Box::new(ReadOnlyStore),
            Box::new(FixedClock(morning())),
        );
        assert_eq!(app.toggle(TaskKey::new(Weekday::Mon, 0)), Some(true));
        assert!(app.status_message.is_some());
        assert_eq!(app.percent(), 8);
    }

    #[test]
    fn test_history_scroll() {
        let mut app = create_test_app();
        app.submit_archive();
        app.submit_archive();

        app.scroll_history_down();
        app.scroll_history_down();
        assert_eq!(app.history_scroll_offset, 1);
        app.scroll_history_up();
        app.scroll_history_up();
        assert_eq!(app.history_scroll_offset, 0);
    }
}

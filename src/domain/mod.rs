pub mod archiver;
pub mod enums;
pub mod progress;
pub mod shutdown;
pub mod state;
pub mod week;

pub use archiver::{HistoryArchiver, FIELD_LABELS};
pub use enums::{UiMode, View};
pub use progress::{
    completion_percent, current_streak, day_done_count, day_total_minutes, is_day_complete,
    is_today_complete, outcome_series, today_plan, week_total_minutes, StreakThresholds,
};
pub use shutdown::{ShutdownAdvisor, DEFAULT_SHUTDOWN_HOUR};
pub use state::{DashboardState, WeekSummary};
pub use week::{build_week, DayPlan, TaskKey, WeekTemplate, Weekday};

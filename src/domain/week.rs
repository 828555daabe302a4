use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Working day of the dashboard week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays in calendar order
    pub fn all() -> &'static [Weekday; 5] {
        &[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
    }

    /// Position in the week (Monday = 0)
    pub fn index(&self) -> u8 {
        match self {
            Weekday::Mon => 0,
            Weekday::Tue => 1,
            Weekday::Wed => 2,
            Weekday::Thu => 3,
            Weekday::Fri => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::all().get(index as usize).copied()
    }

    /// Map a calendar weekday, weekends have no plan
    pub fn from_chrono(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Mon),
            chrono::Weekday::Tue => Some(Weekday::Tue),
            chrono::Weekday::Wed => Some(Weekday::Wed),
            chrono::Weekday::Thu => Some(Weekday::Thu),
            chrono::Weekday::Fri => Some(Weekday::Fri),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }

    /// Parse a day name ("mon", "Monday") or a 1-based number ("1".."5")
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if let Ok(n) = input.parse::<u8>() {
            return n.checked_sub(1).and_then(Self::from_index);
        }
        Self::all()
            .iter()
            .copied()
            .find(|day| input.len() >= 3 && day.name().to_lowercase().starts_with(&input))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recurring task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub label: String,
    #[serde(default)]
    pub estimated_minutes: u32,
}

impl Task {
    pub fn new(label: impl Into<String>, estimated_minutes: u32) -> Self {
        Self {
            label: label.into(),
            estimated_minutes,
        }
    }
}

/// Tasks configured for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTemplate {
    pub day: Weekday,
    pub tasks: Vec<Task>,
}

/// Static definition of a week's tasks, one entry per weekday in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DayTemplate>", into = "Vec<DayTemplate>")]
pub struct WeekTemplate {
    days: Vec<DayTemplate>,
}

impl WeekTemplate {
    pub fn days(&self) -> &[DayTemplate] {
        &self.days
    }

    pub fn total_tasks(&self) -> usize {
        self.days.iter().map(|d| d.tasks.len()).sum()
    }
}

/// Every task position of a day must fit in a `TaskKey`
pub const MAX_TASKS_PER_DAY: usize = u16::MAX as usize + 1;

impl TryFrom<Vec<DayTemplate>> for WeekTemplate {
    type Error = String;

    fn try_from(days: Vec<DayTemplate>) -> Result<Self, Self::Error> {
        let in_order = days.len() == 5
            && days
                .iter()
                .zip(Weekday::all())
                .all(|(template, day)| template.day == *day);
        if !in_order {
            return Err("week template must list Mon..Fri exactly once, in order".to_string());
        }
        if let Some(day) = days.iter().find(|day| day.tasks.len() > MAX_TASKS_PER_DAY) {
            return Err(format!(
                "{} has {} tasks, at most {} are supported",
                day.day,
                day.tasks.len(),
                MAX_TASKS_PER_DAY
            ));
        }
        Ok(Self { days })
    }
}

impl From<WeekTemplate> for Vec<DayTemplate> {
    fn from(template: WeekTemplate) -> Self {
        template.days
    }
}

impl Default for WeekTemplate {
    fn default() -> Self {
        let day = |day, tasks: &[(&str, u32)]| DayTemplate {
            day,
            tasks: tasks
                .iter()
                .map(|(label, minutes)| Task::new(*label, *minutes))
                .collect(),
        };

        Self {
            days: vec![
                day(
                    Weekday::Mon,
                    &[
                        ("Review job boards and shortlist roles", 30),
                        ("Apply to 3 roles", 90),
                        ("Update application tracker", 15),
                    ],
                ),
                day(
                    Weekday::Tue,
                    &[
                        ("Send 1 networking message", 20),
                        ("Tailor resume for a target employer", 45),
                        ("Apply to 2 roles", 60),
                    ],
                ),
                day(
                    Weekday::Wed,
                    &[
                        ("Follow up on 1 contact", 15),
                        ("Practice interview questions", 45),
                    ],
                ),
                day(
                    Weekday::Thu,
                    &[
                        ("Apply to 3 roles", 90),
                        ("Research 2 target companies", 40),
                        ("Send 1 networking message", 20),
                    ],
                ),
                day(
                    Weekday::Fri,
                    &[
                        ("Log progress in tracker", 15),
                        ("Plan next week's targets", 20),
                    ],
                ),
            ],
        }
    }
}

/// Stable identifier for a task within the active week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskKey {
    pub day_index: u8,
    pub task_index: u16,
}

impl TaskKey {
    pub fn new(day: Weekday, task_index: u16) -> Self {
        Self {
            day_index: day.index(),
            task_index,
        }
    }

    /// Key for a position given as `usize`; None when it can't be represented
    pub fn try_new(day: Weekday, task_index: usize) -> Option<Self> {
        u16::try_from(task_index)
            .ok()
            .map(|task_index| Self::new(day, task_index))
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day_index, self.task_index)
    }
}

impl TryFrom<String> for TaskKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (day, task) = value
            .split_once('-')
            .ok_or_else(|| format!("invalid task key: {}", value))?;
        let day_index: u8 = day
            .parse()
            .map_err(|_| format!("invalid day in task key: {}", value))?;
        if Weekday::from_index(day_index).is_none() {
            return Err(format!("day out of range in task key: {}", value));
        }
        let task_index = task
            .parse()
            .map_err(|_| format!("invalid task index in task key: {}", value))?;
        Ok(Self {
            day_index,
            task_index,
        })
    }
}

impl From<TaskKey> for String {
    fn from(key: TaskKey) -> Self {
        key.to_string()
    }
}

/// One weekday's tasks attached to a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: Weekday,
    pub tasks: Vec<Task>,
    pub date: NaiveDate,
}

impl DayPlan {
    /// Human readable date, e.g. "Oct 12"
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }

    /// Keys for every task of this day, in task order
    pub fn task_keys(&self) -> impl Iterator<Item = TaskKey> + '_ {
        (0..self.tasks.len()).filter_map(move |i| TaskKey::try_new(self.day, i))
    }
}

/// Monday of the week containing `reference`; weekends roll back to the Monday already passed
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(reference.weekday().num_days_from_monday() as i64)
}

/// Attach calendar dates to the template for the week containing `reference`
pub fn build_week(template: &WeekTemplate, reference: NaiveDate) -> Vec<DayPlan> {
    let monday = week_start(reference);

    template
        .days()
        .iter()
        .map(|day| DayPlan {
            day: day.day,
            tasks: day.tasks.clone(),
            date: monday + Duration::days(day.day.index() as i64),
        })
        .collect()
}

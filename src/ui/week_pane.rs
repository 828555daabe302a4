use crate::app::AppState;
use crate::domain::{day_done_count, day_total_minutes, is_day_complete, DayPlan};
use crate::ui::styles::{
    border_style, day_style, default_style, done_style, muted_style, selected_style, title_style,
    today_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Format minutes as "Xh Ym", "Xh" or "Xm"
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 && mins > 0 {
        format!("{}h {}m", hours, mins)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}m", mins)
    }
}

fn day_heading(app: &AppState, day: &DayPlan) -> Line<'static> {
    let is_today = day.date == app.today;
    let done = day_done_count(day, &app.state.checked);
    let complete = is_day_complete(day, &app.state.checked);

    let mut spans = vec![
        Span::styled(
            format!("{} · {}", day.day.name(), day.date_label()),
            if is_today { today_style() } else { day_style() },
        ),
        Span::styled(
            format!(
                "  {} planned  {}/{}",
                format_minutes(day_total_minutes(day)),
                done,
                day.tasks.len()
            ),
            muted_style(),
        ),
    ];
    if is_today {
        spans.push(Span::styled("  today", today_style()));
    }
    if complete && !day.tasks.is_empty() {
        spans.push(Span::styled("  ✓", done_style()));
    }
    Line::from(spans)
}

/// Render the week's checklist
pub fn render_week_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut task_position = 0;

    for day in &app.week {
        items.push(ListItem::new(day_heading(app, day)));

        for (key, task) in day.task_keys().zip(&day.tasks) {
            let checked = app.state.is_checked(key);
            let is_selected = task_position == app.selected_index;
            if is_selected {
                selected_row = Some(items.len());
            }

            let (checkbox, label_style) = if checked {
                ("[x] ", done_style())
            } else {
                ("[ ] ", default_style())
            };
            let line = Line::from(vec![
                Span::raw("   "),
                Span::styled(checkbox, label_style),
                Span::styled(task.label.clone(), label_style),
                Span::styled(
                    format!("  ({})", format_minutes(task.estimated_minutes)),
                    muted_style(),
                ),
            ]);
            items.push(ListItem::new(line));
            task_position += 1;
        }

        items.push(ListItem::new(Line::raw("")));
    }

    let summary = app.summary();
    let title = format!(
        " This Week · {} – {} · {}% ",
        app.week.first().map(|d| d.date_label()).unwrap_or_default(),
        app.week.last().map(|d| d.date_label()).unwrap_or_default(),
        summary.percent
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    let mut state = ListState::default().with_selected(selected_row);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(135), "2h 15m");
    }
}

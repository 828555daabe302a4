use crate::app::AppState;
use crate::domain::{day_total_minutes, week_total_minutes};
use crate::ui::styles::{border_style, default_style, gauge_style, shutdown_style, title_style};
use crate::ui::week_pane::format_minutes;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Render the progress bar, streak and the stop-working cue
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let summary = app.summary();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Progress ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(summary.percent as u16)
        .label(format!("{}% complete", summary.percent));
    f.render_widget(gauge, chunks[0]);

    let mut lines = vec![Line::raw("")];

    let today_line = match app.today_plan() {
        Some(plan) => format!(
            "Today: {} · {} planned{}",
            plan.day.name(),
            format_minutes(day_total_minutes(plan)),
            if summary.today_complete { " · all done" } else { "" }
        ),
        None => "Today: weekend, no tasks planned".to_string(),
    };
    lines.push(Line::styled(today_line, default_style()));

    lines.push(Line::from(vec![
        Span::styled("Week: ", title_style()),
        Span::raw(format!("{} planned", format_minutes(week_total_minutes(&app.week)))),
    ]));

    let thresholds = &app.config.streak_thresholds;
    lines.push(Line::from(vec![
        Span::styled("Streak: ", title_style()),
        Span::raw(format!(
            "{} qualifying week{} ({}+ apps, {}+ contacts or {}+ interviews)",
            summary.streak,
            if summary.streak == 1 { "" } else { "s" },
            thresholds.applications,
            thresholds.networking_contacts,
            thresholds.interviews
        )),
    ]));

    if summary.show_shutdown {
        lines.push(Line::raw(""));
        lines.push(Line::styled(" Shutdown: you're done for today. Log off. ", shutdown_style()));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

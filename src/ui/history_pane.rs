use crate::app::AppState;
use crate::domain::WeekSummary;
use crate::ui::styles::{border_style, default_style, done_style, muted_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Create a line for an archived week
fn create_history_line(summary: &WeekSummary, qualifies: bool) -> Line<'static> {
    let marker = if qualifies {
        Span::styled("★ ", done_style())
    } else {
        Span::styled("  ", muted_style())
    };

    Line::from(vec![
        marker,
        Span::styled(summary.archived_at.format("%Y-%m-%d").to_string(), default_style()),
        Span::raw(format!("  {:>3}%", summary.completion_percent)),
        Span::styled(
            format!(
                "   apps {:>3}  contacts {:>3}  interviews {:>3}",
                summary.applications, summary.networking_contacts, summary.interviews
            ),
            muted_style(),
        ),
    ])
}

/// Render the archived weeks, newest first
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let thresholds = &app.config.streak_thresholds;
    let count = app.state.history.len();

    let items: Vec<ListItem> = if count == 0 {
        vec![ListItem::new(Line::styled(
            "No archived weeks yet. Press 'a' to close out this week.",
            muted_style(),
        ))]
    } else {
        app.state
            .history
            .iter()
            .skip(app.history_scroll_offset)
            .map(|summary| {
                ListItem::new(create_history_line(summary, thresholds.is_met_by(summary)))
            })
            .collect()
    };

    let title = if app.history_scroll_offset > 0 {
        format!(" Archive ({}) [scrolled +{}] ", count, app.history_scroll_offset)
    } else {
        format!(" Archive ({}) ", count)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

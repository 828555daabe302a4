use crate::app::AppState;
use crate::domain::outcome_series;
use crate::ui::styles::{border_style, muted_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

/// Most recent values that fit in `width` columns, newest on the right
fn tail(values: &[u64], width: usize) -> Vec<u64> {
    values[values.len().saturating_sub(width)..].to_vec()
}

/// Render one sparkline per outcome across archived weeks
pub fn render_trends_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Trends ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let series = outcome_series(&app.state.history);
    if series.applications.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("Archive a week to see trends.", muted_style())),
            inner,
        );
        return;
    }

    let width = inner.width as usize;
    let max = series.max_value().max(1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Ratio(1, 3),
            Constraint::Length(1),
            Constraint::Ratio(1, 3),
            Constraint::Length(1),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let charts = [
        ("Applications", tail(&series.applications, width), Color::Green),
        ("Networking", tail(&series.networking_contacts, width), Color::Cyan),
        ("Interviews", tail(&series.interviews, width), Color::Magenta),
    ];

    for (i, (label, data, color)) in charts.iter().enumerate() {
        let latest = data.last().copied().unwrap_or(0);
        f.render_widget(
            Paragraph::new(Line::styled(format!("{} (last: {})", label, latest), muted_style())),
            rows[i * 2],
        );
        f.render_widget(
            Sparkline::default()
                .data(data)
                .max(max)
                .style(Style::default().fg(*color)),
            rows[i * 2 + 1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_newest() {
        assert_eq!(tail(&[1, 2, 3, 4], 2), vec![3, 4]);
        assert_eq!(tail(&[1, 2], 5), vec![1, 2]);
    }
}

pub mod archive_form;
pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod progress_pane;
pub mod styles;
pub mod trends_pane;
pub mod week_pane;

use crate::app::AppState;
use crate::domain::{UiMode, View};
use archive_form::render_archive_form;
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use progress_pane::render_progress_pane;
use ratatui::{text::Line, widgets::Paragraph, Frame};
use styles::{error_style, hint_style};
use trends_pane::render_trends_pane;
use week_pane::render_week_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);

    match app.view {
        View::Week => render_week_pane(f, app, layout.main_area),
        View::History => render_history_pane(f, app, layout.main_area),
    }
    render_progress_pane(f, app, layout.progress_area);
    render_trends_pane(f, app, layout.trends_area);

    let status = match &app.status_message {
        Some(message) => Paragraph::new(Line::raw(format!(" {}", message))).style(error_style()),
        None => Paragraph::new(Line::raw(format!(
            " {} · {} · {}",
            app.view.name(),
            app.today.format("%a %b %-d"),
            app.config.timezone
        )))
        .style(hint_style()),
    };
    f.render_widget(status, layout.status_area);

    if app.ui_mode == UiMode::ArchiveForm {
        render_archive_form(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::{TaskKey, Weekday};
    use crate::persistence::{Config, MemoryStore};
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_week_and_archive_form() {
        let mut app = AppState::new(
            Config::default(),
            Box::new(MemoryStore::default()),
            Box::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 14, 14, 0, 0).unwrap())),
        );
        app.toggle(TaskKey::new(Weekday::Mon, 0));

        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Monday"));
        assert!(text.contains("Apply to 3 roles"));
        assert!(text.contains("8% complete"));

        app.open_archive_form();
        terminal.draw(|f| render(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Close Out Week"));

        app.submit_archive();
        app.toggle_view();
        terminal.draw(|f| render(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Archive (1)"));
    }
}

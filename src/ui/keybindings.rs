use crate::app::AppState;
use crate::domain::{UiMode, View};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match (app.ui_mode, app.view) {
        (UiMode::ArchiveForm, _) => Line::from(vec![
            Span::raw(" Tab next field   "),
            Span::raw("Enter archive   "),
            Span::raw("Esc cancel"),
        ]),
        (UiMode::Normal, View::Week) => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Enter/Space toggle   "),
            Span::raw("h archive view   "),
            Span::raw("a close week   "),
            Span::raw("q quit"),
        ]),
        (UiMode::Normal, View::History) => Line::from(vec![
            Span::raw(" ↑/↓ scroll   "),
            Span::raw("h week view   "),
            Span::raw("a close week   "),
            Span::raw("q quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

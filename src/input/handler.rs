use crate::app::AppState;
use crate::domain::{UiMode, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::ArchiveForm => handle_archive_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,

        KeyCode::Up | KeyCode::Char('k') => match app.view {
            View::Week => app.move_selection_up(),
            View::History => app.scroll_history_up(),
        },
        KeyCode::Down | KeyCode::Char('j') => match app.view {
            View::Week => app.move_selection_down(),
            View::History => app.scroll_history_down(),
        },

        // Toggle the selected task
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.view == View::Week {
                app.toggle_selected();
            }
        }

        KeyCode::Char('h') | KeyCode::Tab => app.toggle_view(),
        KeyCode::Char('a') => app.open_archive_form(),

        _ => {}
    }
    false
}

/// Handle keys while entering the week's totals
fn handle_archive_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.cancel_archive_form(),
        KeyCode::Enter => {
            app.submit_archive();
        }
        KeyCode::Tab | KeyCode::Down => app.archiver.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.archiver.previous_field(),
        KeyCode::Backspace => app.archiver.backspace(),
        KeyCode::Char(c) => app.archiver.push_char(c),
        _ => {}
    }
    false
}

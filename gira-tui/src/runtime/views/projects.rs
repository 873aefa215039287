use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handle_global_key;

pub(super) fn handle_projects_key(key: KeyEvent, app: &mut App) {
    if app.project_search_active {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                app.project_search_active = false;
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.project_search.clear();
                app.filter_projects();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.project_search_char(c);
            }
            KeyCode::Backspace => app.project_search_backspace(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => {
            app.project_search_active = true;
        }
        KeyCode::Down | KeyCode::Char('j') => app.projects_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.projects_focus_up(),
        KeyCode::Left | KeyCode::Char('h') => app.projects_prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.projects_next_page(),
        KeyCode::Char(' ') => app.projects_toggle_checked(),
        KeyCode::Char('a') => app.projects_toggle_select_all(),
        KeyCode::Char('s') => app.cycle_project_status_filter(),
        _ => {
            handle_global_key(key, app);
        }
    }
}

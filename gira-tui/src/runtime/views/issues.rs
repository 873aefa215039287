use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handle_global_key;

pub(super) fn handle_issues_key(key: KeyEvent, app: &mut App) {
    // Search mode takes every printable key.
    if app.issue_search_active {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                app.issue_search_active = false;
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.issue_search_clear();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.issue_search_char(c);
            }
            KeyCode::Backspace => app.issue_search_backspace(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => {
            app.issue_search_active = true;
        }
        KeyCode::Down | KeyCode::Char('j') => app.issues_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.issues_focus_up(),
        KeyCode::Enter => {
            if let Some(id) = app.focused_issue().map(|i| i.id.clone()) {
                app.open_detail(id);
            }
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.navigate_to(crate::app::View::CreateIssue);
        }
        KeyCode::Char('s') => app.cycle_status_filter(),
        KeyCode::Char('y') => app.cycle_priority_filter(),
        KeyCode::Char('t') => app.cycle_kind_filter(),
        KeyCode::Char('c') => app.clear_issue_filters(),
        _ => {
            handle_global_key(key, app);
        }
    }
}

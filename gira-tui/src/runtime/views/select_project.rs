use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_select_project_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.selector_search_clear();
        }
        KeyCode::Tab => {
            app.selector_list_focused = true;
        }
        KeyCode::BackTab => {
            app.selector_list_focused = false;
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL) && c != 'q' && c != 'Q' =>
        {
            if app.selector_list_focused && c == 'j' {
                app.selector_next();
            } else if app.selector_list_focused && c == 'k' {
                app.selector_previous();
            } else if !app.selector_list_focused {
                app.selector_search_char(c);
            }
        }
        KeyCode::Backspace => {
            if !app.selector_list_focused {
                app.selector_search_backspace();
            }
        }
        KeyCode::Down => app.selector_next(),
        KeyCode::Up => app.selector_previous(),
        KeyCode::Enter => app.confirm_selector(),
        KeyCode::Esc => app.cancel_selector(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

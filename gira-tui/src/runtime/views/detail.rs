use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handle_global_key;

pub(super) fn handle_detail_key(key: KeyEvent, app: &mut App) {
    // "Not found" placeholder: only navigation applies.
    let Some(state) = &mut app.detail else {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                app.navigate_to(View::Issues)
            }
            _ => {
                handle_global_key(key, app);
            }
        }
        return;
    };

    if state.form.is_editing() {
        match key.code {
            KeyCode::Enter => {
                if let Err(message) = state.form.commit_edit() {
                    app.set_status(message);
                }
            }
            KeyCode::Esc => state.form.cancel_edit(),
            KeyCode::Backspace => state.form.input_backspace(),
            KeyCode::Left => state.form.input_move_cursor(true),
            KeyCode::Right => state.form.input_move_cursor(false),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.save_detail();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.form.input_char(c);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => state.form.focus_prev(),
        KeyCode::Enter => {
            if state.form.focused_field.is_text() {
                state.form.begin_edit();
            } else {
                let users = app.users.clone();
                if let Some(state) = &mut app.detail {
                    state.form.cycle_value(true, &users);
                }
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let users = app.users.clone();
            if let Some(state) = &mut app.detail {
                state.form.cycle_value(false, &users);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let users = app.users.clone();
            if let Some(state) = &mut app.detail {
                state.form.cycle_value(true, &users);
            }
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.save_detail();
        }
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.navigate_to(View::Issues);
        }
        _ => {
            handle_global_key(key, app);
        }
    }
}

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_create_issue_key(key: KeyEvent, app: &mut App) {
    let Some(state) = &mut app.create else {
        app.navigate_to(crate::app::View::Issues);
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
                app.create_submit();
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
                if let Some(state) = &mut app.create {
                    state.form.cycle_value(true, &users);
                }
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let users = app.users.clone();
            if let Some(state) = &mut app.create {
                state.form.cycle_value(false, &users);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let users = app.users.clone();
            if let Some(state) = &mut app.create {
                state.form.cycle_value(true, &users);
            }
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.create_submit();
        }
        KeyCode::Esc => app.cancel_create(),
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        _ => {}
    }
}

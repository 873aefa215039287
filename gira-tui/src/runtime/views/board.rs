use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::handle_global_key;

pub(super) fn handle_board_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.board_focus_left(),
        KeyCode::Right | KeyCode::Char('l') => app.board_focus_right(),
        KeyCode::Down | KeyCode::Char('j') => app.board_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.board_focus_up(),
        KeyCode::Char(' ') => app.board_pick_or_drop(),
        KeyCode::Esc => app.board_cancel_carry(),
        KeyCode::Enter => {
            if app.carried.is_none() {
                if let Some(id) = app.board_focused_issue().map(|i| i.id.clone()) {
                    app.open_detail(id);
                }
            }
        }
        _ => {
            // A carried card blocks page switches so a drag can only end
            // in a drop or a cancel.
            if app.carried.is_none() {
                handle_global_key(key, app);
            } else if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
                app.quit();
            }
        }
    }
}

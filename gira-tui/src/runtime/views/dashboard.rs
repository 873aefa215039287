use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::handle_global_key;

pub(super) fn handle_dashboard_key(key: KeyEvent, app: &mut App) {
    if handle_global_key(key, app) {
        return;
    }
    if let KeyCode::Char('r') | KeyCode::Char('R') = key.code {
        app.recompute_dashboard();
        app.set_status("Dashboard refreshed".to_string());
    }
}

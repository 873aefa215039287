use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent};

mod board;
mod create_issue;
mod dashboard;
mod detail;
mod issues;
mod projects;
mod select_project;

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App) {
    match app.current_view {
        app::View::Dashboard => dashboard::handle_dashboard_key(key, app),
        app::View::Issues => issues::handle_issues_key(key, app),
        app::View::IssueDetail => detail::handle_detail_key(key, app),
        app::View::Board => board::handle_board_key(key, app),
        app::View::Projects => projects::handle_projects_key(key, app),
        app::View::SelectProject => select_project::handle_select_project_key(key, app),
        app::View::CreateIssue => create_issue::handle_create_issue_key(key, app),
    }
}

/// The notification panel swallows every key while open.
pub(super) fn handle_notification_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.notifications_open = false;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

/// Keys shared by the full-page views: tab switching, the project
/// selector, the notification panel, quitting. Returns true when handled.
pub(in crate::runtime) fn handle_global_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('1') => app.navigate_to(app::View::Dashboard),
        KeyCode::Char('2') => app.navigate_to(app::View::Issues),
        KeyCode::Char('3') => app.navigate_to(app::View::Board),
        KeyCode::Char('4') => app.navigate_to(app::View::Projects),
        KeyCode::Char('p') | KeyCode::Char('P') => app.open_selector(),
        KeyCode::Char('N') => app.toggle_notifications(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => return false,
    }
    true
}

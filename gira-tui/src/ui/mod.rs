use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

mod board_view;
mod create_dialog;
mod dashboard_view;
mod detail_view;
mod issues_view;
mod notification_panel;
mod projects_view;
mod select_project;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Dashboard => dashboard_view::render_dashboard(frame, app, body),
        View::Issues => issues_view::render_issues(frame, app, body),
        View::IssueDetail => detail_view::render_detail(frame, app, body),
        View::Board => board_view::render_board(frame, app, body),
        View::Projects => projects_view::render_projects(frame, app, body),
        View::SelectProject => select_project::render_select_project(frame, app, body),
        View::CreateIssue => {
            // The dialog floats over the issues page it was opened from.
            issues_view::render_issues(frame, app, body);
            create_dialog::render_create_dialog(frame, app, body);
        }
    }

    render_status_bar(frame, root[2], app);

    // Notification panel renders on top of any view.
    if app.notifications_open {
        notification_panel::render_notification_panel(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let tab = |label: &str, view: View| {
        let active = matches!(
            (app.current_view, view),
            (View::Dashboard, View::Dashboard)
                | (View::Issues, View::Issues)
                | (View::IssueDetail, View::Issues)
                | (View::CreateIssue, View::Issues)
                | (View::Board, View::Board)
                | (View::Projects, View::Projects)
        );
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    };

    let unread = app.unread_notifications();
    let bell = if unread > 0 {
        Span::styled(
            format!("N({})", unread),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("N(0)".to_string(), Style::default().fg(Color::DarkGray))
    };

    let left = vec![
        Span::styled(
            " gira ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        tab("1 Dashboard", View::Dashboard),
        tab("2 Issues", View::Issues),
        tab("3 Board", View::Board),
        tab("4 Projects", View::Projects),
        Span::raw("   "),
        Span::styled("Project: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.scope_label(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        bell,
    ];

    let lines = vec![
        Line::from(left),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status_message {
        Some(message) => Span::styled(message.clone(), Style::default().fg(Color::Yellow)),
        None => Span::styled(contextual_hint(app), Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(text)).alignment(Alignment::Left),
        area,
    );
}

fn contextual_hint(app: &App) -> String {
    match app.current_view {
        View::Dashboard => "1-4: Switch view  P: Project scope  N: Notifications  Q: Quit".to_string(),
        View::Issues => "Enter: Open  o: New issue  /: Search  s/y/t: Filters".to_string(),
        View::Board => {
            if app.carried.is_some() {
                "Space: Drop  Esc: Cancel".to_string()
            } else {
                "Space: Pick up card  Enter: Open  h/j/k/l: Move".to_string()
            }
        }
        View::IssueDetail => "Enter: Edit field  Ctrl+S: Save  Esc: Back".to_string(),
        View::Projects => "Space: Select  h/l: Page  s: Status filter  /: Search".to_string(),
        View::SelectProject => "Type to search, Enter to choose a project scope".to_string(),
        View::CreateIssue => "Tab: Next field  Ctrl+S: Create  Esc: Cancel".to_string(),
    }
}

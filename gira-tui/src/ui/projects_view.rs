use crate::app::App;
use gira_core::ProjectStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::widgets;

pub fn render_projects(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Status chips
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Pagination
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_search_box(frame, app, chunks[0]);
    render_status_chips(frame, app, chunks[1]);
    render_table(frame, app, chunks[2]);
    render_pagination(frame, app, chunks[3]);

    let controls = widgets::controls_paragraph(&[
        ("j/k", "Row"),
        ("Space", "Select"),
        ("a", "Select all"),
        ("h/l", "Page"),
        ("s", "Status filter"),
        ("/", "Search"),
        ("Q", "Quit"),
    ]);
    frame.render_widget(controls, chunks[4]);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.project_search_active {
        let (before, after) = app.project_search.split_at_cursor();
        format!("{}█{}", before, after)
    } else if app.project_search.value.is_empty() {
        "Press / to search projects...".to_string()
    } else {
        app.project_search.value.clone()
    };
    let border = if app.project_search_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(" Search ")
                    .padding(Padding::horizontal(1)),
            ),
        area,
    );
}

fn render_status_chips(frame: &mut Frame, app: &App, area: Rect) {
    let chip = |label: &str, value: Option<ProjectStatus>| -> Span<'static> {
        let active = app.project_status_filter == value;
        if active {
            Span::styled(
                format!("[{}]", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    };

    let spans = vec![
        chip("All", None),
        Span::raw(" "),
        chip("Active", Some(ProjectStatus::Active)),
        Span::raw(" "),
        chip("Completed", Some(ProjectStatus::Completed)),
        Span::raw(" "),
        chip("Archived", Some(ProjectStatus::Archived)),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let issues = app.backend.issues();
    let page_start = app.project_page * app.page_size;

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            "    {:<28} {:<20} {:<14} {:<10}",
            "Name", "Progress", "Owner", "Status"
        ),
        Style::default().fg(Color::DarkGray),
    ))];

    for (offset, project) in app.visible_projects().iter().enumerate() {
        let global_idx = page_start + offset;
        let focused = global_idx == app.project_index;
        let checked = app.checked_projects.contains(&project.id);

        let checkbox = if checked { "[x] " } else { "[ ] " };
        let progress = project.progress(&issues);

        if focused {
            let text = format!(
                "{}{:<28} {:>3}%{:<16} {:<14} {:<10}",
                checkbox,
                truncate(&project.name, 27),
                progress,
                "",
                truncate(&project.owner.name, 13),
                project.status.label()
            );
            lines.push(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            continue;
        }

        let mut spans = vec![
            Span::styled(checkbox.to_string(), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:<28} ", truncate(&project.name, 27)),
                Style::default().fg(Color::White),
            ),
        ];
        spans.extend(widgets::progress_bar(progress, 12));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{:<14} ", truncate(&project.owner.name, 13)),
            Style::default().fg(Color::Cyan),
        ));
        let status_color = match project.status {
            ProjectStatus::Active => Color::Green,
            ProjectStatus::Completed => Color::Blue,
            ProjectStatus::Archived => Color::DarkGray,
        };
        spans.push(Span::styled(
            project.status.label().to_string(),
            Style::default().fg(status_color),
        ));
        lines.push(Line::from(spans));
    }

    let title = format!(
        " Projects ({}/{}) ",
        app.filtered_projects.len(),
        app.projects.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(title)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.total_project_pages();
    let line = Line::from(vec![
        Span::styled("‹ h ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("Page {}/{}", app.project_page + 1, total),
            Style::default().fg(Color::White),
        ),
        Span::styled(" l ›", Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};
use time::OffsetDateTime;

use super::widgets;

pub fn render_issues(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Filter line
            Constraint::Min(0),    // Issue list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_search_box(frame, app, chunks[0]);
    render_filter_line(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);

    let controls = widgets::controls_paragraph(&[
        ("Enter", "Open"),
        ("o", "New issue"),
        ("/", "Search"),
        ("s/y/t", "Status/Priority/Type filter"),
        ("c", "Clear filters"),
        ("Q", "Quit"),
    ]);
    frame.render_widget(controls, chunks[3]);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let search_text = if app.issue_search_active {
        let (before, after) = app.issue_search.split_at_cursor();
        format!("{}█{}", before, after)
    } else if app.issue_search.value.is_empty() {
        "Press / to search...".to_string()
    } else {
        app.issue_search.value.clone()
    };
    let border = if app.issue_search_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}

fn render_filter_line(frame: &mut Frame, app: &App, area: Rect) {
    let facet = |label: &str, value: Option<String>| -> Vec<Span<'static>> {
        let display = value.unwrap_or_else(|| "all".to_string());
        vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(display, Style::default().fg(Color::Cyan)),
            Span::raw("   "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(facet(
        "status",
        app.status_filter.map(|s| s.label().to_string()),
    ));
    spans.extend(facet(
        "priority",
        app.priority_filter.map(|p| p.label().to_string()),
    ));
    spans.extend(facet("type", app.kind_filter.map(|k| k.label().to_string())));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let today = OffsetDateTime::now_utc().date();
    let items: Vec<ListItem> = app
        .filtered_issues
        .iter()
        .enumerate()
        .map(|(i, issue)| ListItem::new(widgets::issue_row(issue, i == app.issue_index, today)))
        .collect();

    let title = if app.filtered_issues.len() == app.issues.len() {
        format!(" Issues ({}) ", app.issues.len())
    } else {
        format!(
            " Issues ({}/{}) ",
            app.filtered_issues.len(),
            app.issues.len()
        )
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);

    if app.filtered_issues.is_empty() {
        let empty = Paragraph::new("No issues match the current filters")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        let inner = Rect {
            x: area.x + 1,
            y: area.y + area.height / 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(empty, inner);
    }
}

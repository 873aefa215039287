use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use super::widgets;

pub fn render_select_project(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Project list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    // Search input box
    let search_text = if app.selector_search.value.is_empty() {
        if app.selector_list_focused {
            "Type to search...".to_string()
        } else {
            "█".to_string()
        }
    } else if app.selector_list_focused {
        app.selector_search.value.clone()
    } else {
        let (before, after) = app.selector_search.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_border = if app.selector_list_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    // Choice list: the all-projects entry plus each project with its
    // status.
    let items: Vec<ListItem> = app
        .selector_choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let text = match choice {
                None => "All projects".to_string(),
                Some(project) => format!("{}  ({})", project.name, project.status.label()),
            };
            let style = if i == app.selector_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let title = format!(" Projects ({}) ", app.selector_choices.len());
    let list_border = if app.selector_list_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(list_border)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    let controls = widgets::controls_paragraph(&[
        ("Type", "Filter"),
        ("Tab", "Focus list"),
        ("↑↓/j/k", "Navigate"),
        ("Enter", "Select"),
        ("Ctrl+X", "Clear"),
        ("Esc", "Cancel"),
    ]);
    frame.render_widget(controls, chunks[2]);
}

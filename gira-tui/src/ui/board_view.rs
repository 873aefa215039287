use crate::app::App;
use gira_core::Issue;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use time::OffsetDateTime;

use super::widgets;

pub fn render_board(frame: &mut Frame, app: &App, body: Rect) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let column_count = app.board.columns().len().max(1);
    let constraints: Vec<Constraint> = (0..column_count)
        .map(|_| Constraint::Ratio(1, column_count as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(outer[0]);

    for (idx, area) in columns.iter().enumerate() {
        render_column(frame, app, idx, *area);
    }

    let controls = if app.carried.is_some() {
        widgets::controls_paragraph(&[
            ("h/l", "Choose column"),
            ("Space", "Drop"),
            ("Esc", "Cancel"),
        ])
    } else {
        widgets::controls_paragraph(&[
            ("h/l", "Column"),
            ("j/k", "Card"),
            ("Space", "Pick up"),
            ("Enter", "Open"),
            ("Q", "Quit"),
        ])
    };
    frame.render_widget(controls, outer[1]);
}

fn render_column(frame: &mut Frame, app: &App, idx: usize, area: Rect) {
    let Some(column) = app.board.columns().get(idx) else {
        return;
    };
    let visible = app.board_visible(idx);
    let focused_column = idx == app.board_column;

    let border = if focused_column {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = Line::from(vec![
        Span::styled("● ", Style::default().fg(widgets::hex_color(&column.status.color))),
        Span::styled(
            format!("{} ({}) ", column.status.name, visible.len()),
            Style::default().fg(Color::White),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if visible.is_empty() {
        let mut lines = vec![Line::raw("")];
        lines.push(Line::from(Span::styled(
            "No issues",
            Style::default().fg(Color::DarkGray),
        )));
        if app.carried.is_some() && focused_column {
            lines.push(Line::from(Span::styled(
                "▼ drop here",
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let today = OffsetDateTime::now_utc().date();
    let mut lines: Vec<Line> = Vec::new();
    if app.carried.is_some() && focused_column {
        lines.push(Line::from(Span::styled(
            "▼ drop here",
            Style::default().fg(Color::Yellow),
        )));
    }
    for (row, issue) in visible.iter().enumerate() {
        let focused_card = focused_column && row == app.board_row && app.carried.is_none();
        let carried = app
            .carried
            .as_ref()
            .map(|c| c.issue_id == issue.id)
            .unwrap_or(false);
        lines.extend(card_lines(issue, focused_card, carried, today));
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Two lines per card: title, then priority / due / assignee.
fn card_lines(
    issue: &Issue,
    is_focused: bool,
    is_carried: bool,
    today: time::Date,
) -> Vec<Line<'static>> {
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else if is_carried {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White)
    };

    let marker = if is_carried { "⤴ " } else { "" };
    let title = Line::from(vec![
        Span::styled(
            format!("{}#{} ", marker, issue.id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(issue.title.clone(), title_style),
    ]);

    let meta = Line::from(vec![
        Span::raw("  "),
        widgets::kind_badge(issue.kind),
        Span::raw(" "),
        widgets::priority_span(issue.priority),
        Span::raw(" "),
        widgets::due_date_span(issue.due_date, today),
        Span::raw(" "),
        widgets::avatar_span(issue.assignee.as_ref()),
    ]);

    vec![title, meta]
}

use crate::app::App;
use gira_core::IssueStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use time::OffsetDateTime;

use super::widgets;

pub fn render_dashboard(frame: &mut Frame, app: &App, body: Rect) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),     // Stat tiles
            Constraint::Percentage(45), // My issues + activity
            Constraint::Min(0),         // Status pie
        ])
        .split(outer[0]);

    render_stat_tiles(frame, app, panels[0]);
    render_center(frame, app, panels[1]);
    render_status_pie(frame, app, panels[2]);

    let controls = widgets::controls_paragraph(&[
        ("1-4", "Switch view"),
        ("P", "Project scope"),
        ("N", "Notifications"),
        ("r", "Refresh"),
        ("Q", "Quit"),
    ]);
    frame.render_widget(controls, outer[1]);
}

fn render_stat_tiles(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints: Vec<Constraint> = app
        .dashboard
        .by_status
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(3)); // due soon
    constraints.push(Constraint::Min(0));
    let tiles = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, (status, count)) in app.dashboard.by_status.iter().enumerate() {
        render_tile(
            frame,
            tiles[i],
            status.label(),
            *count,
            widgets::status_color(*status),
        );
    }
    render_tile(
        frame,
        tiles[app.dashboard.by_status.len()],
        "Due soon",
        app.dashboard.due_soon,
        Color::Red,
    );
}

fn render_tile(frame: &mut Frame, area: Rect, label: &str, count: usize, color: Color) {
    let line = Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
        Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        ),
        area,
    );
}

fn render_center(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    render_my_issues(frame, app, rows[0]);
    render_activity(frame, app, rows[1]);
}

fn render_my_issues(frame: &mut Frame, app: &App, area: Rect) {
    let today = OffsetDateTime::now_utc().date();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" My issues ({}) ", app.dashboard.my_issues.len()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.dashboard.my_issues.is_empty() {
        frame.render_widget(
            Paragraph::new("No issues assigned to you")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .dashboard
        .my_issues
        .iter()
        .map(|issue| {
            Line::from(vec![
                Span::styled(
                    format!("#{:<3} ", issue.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(issue.title.clone(), Style::default().fg(Color::White)),
                Span::raw("  "),
                widgets::status_badge(issue.status),
                Span::raw("  "),
                widgets::due_date_span(issue.due_date, today),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recent activity ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .activity
        .iter()
        .take(inner.height as usize)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.date),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.text.clone(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_pie(frame: &mut Frame, app: &App, area: Rect) {
    use tui_piechart::{PieChart, PieSlice};

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" By status ")
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = app.dashboard.total;
    if total == 0 {
        frame.render_widget(
            Paragraph::new("No data")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let entries: Vec<(IssueStatus, usize)> = app
        .dashboard
        .by_status
        .iter()
        .filter(|(_, count)| *count > 0)
        .copied()
        .collect();

    let labels: Vec<String> = entries
        .iter()
        .map(|(status, count)| format!("{}: {}", status.label(), count))
        .collect();
    let slices: Vec<PieSlice> = labels
        .iter()
        .zip(entries.iter())
        .map(|(label, (status, count))| {
            let pct = *count as f64 / total as f64 * 100.0;
            PieSlice::new(label.as_str(), pct, widgets::status_color(*status))
        })
        .collect();

    let legend_rows = entries.len() as u16 + 1;
    let pie_height = (inner.width / 2)
        .min(inner.height / 2)
        .min(inner.height.saturating_sub(legend_rows));
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pie_height), Constraint::Min(0)])
        .split(inner);

    let pie = PieChart::new(slices).show_legend(false).show_percentages(false);
    frame.render_widget(pie, split[0]);

    let legend_lines: Vec<Line> = entries
        .iter()
        .map(|(status, count)| {
            let pct = *count as f64 / total as f64 * 100.0;
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(widgets::status_color(*status))),
                Span::styled(
                    format!("{} — {} ({:.0}%)", status.label(), count, pct),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(legend_lines)
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::new(0, 0, 1, 0))),
        split[1],
    );
}

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};
use time::OffsetDateTime;

use super::utils::relative_age;

/// Overlay panel anchored to the top-right corner, on top of any view.
pub fn render_notification_panel(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    let width = 44.min(screen.width);
    let height = (app.notifications.len() as u16 + 4).min(screen.height);
    let area = Rect {
        x: screen.width.saturating_sub(width + 1),
        y: 2.min(screen.height.saturating_sub(height)),
        width,
        height,
    };
    frame.render_widget(Clear, area);

    let now = OffsetDateTime::now_utc();
    let mut lines: Vec<Line> = Vec::new();
    if app.notifications.is_empty() {
        lines.push(Line::from(Span::styled(
            "No notifications",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for notification in &app.notifications {
        let (marker, text_style) = if notification.read {
            ("  ", Style::default().fg(Color::Gray))
        } else {
            (
                "● ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Blue)),
            Span::styled(notification.text.clone(), text_style),
            Span::styled(
                format!("  {}", relative_age(notification.at, now)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("N/Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Close"),
    ]));

    let unread = app.unread_notifications();
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                format!(" Notifications ({} unread) ", unread),
                Style::default().fg(Color::Yellow),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(panel, area);
}

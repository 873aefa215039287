use gira_core::{days_until, Issue, IssueKind, IssueStatus, Priority, User};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use time::Date;

/// Display color per status, matching the board column palette.
pub fn status_color(status: IssueStatus) -> Color {
    match status {
        IssueStatus::Open => Color::Blue,
        IssueStatus::InProgress => Color::Yellow,
        IssueStatus::Resolved => Color::Magenta,
        IssueStatus::Closed => Color::Green,
    }
}

pub fn status_badge(status: IssueStatus) -> Span<'static> {
    Span::styled(status.label(), Style::default().fg(status_color(status)))
}

pub fn priority_span(priority: Priority) -> Span<'static> {
    let (color, bold) = match priority {
        Priority::Low => (Color::Green, false),
        Priority::Medium => (Color::Yellow, false),
        Priority::High => (Color::Red, false),
        Priority::Urgent => (Color::Red, true),
    };
    let style = if bold {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!("● {}", priority.label()), style)
}

pub fn kind_badge(kind: IssueKind) -> Span<'static> {
    let color = match kind {
        IssueKind::Bug => Color::Red,
        IssueKind::Feature => Color::Blue,
        IssueKind::Task => Color::White,
        IssueKind::Improvement => Color::Green,
    };
    Span::styled(format!("[{}]", kind.label()), Style::default().fg(color))
}

/// Due date as a countdown: "D-3", "D-day", "D+2" (overdue), "-" when
/// absent.
pub fn due_date_span(due: Option<Date>, today: Date) -> Span<'static> {
    let Some(due) = due else {
        return Span::styled("-", Style::default().fg(Color::DarkGray));
    };
    let days = days_until(due, today);
    if days < 0 {
        Span::styled(
            format!("D+{}", -days),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if days == 0 {
        Span::styled(
            "D-day".to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("D-{}", days), Style::default().fg(Color::Gray))
    }
}

/// Initial-letter avatar, the terminal stand-in for the avatar bubble.
pub fn avatar_span(user: Option<&User>) -> Span<'static> {
    match user {
        Some(user) => {
            let initial = user.name.chars().next().unwrap_or('?');
            Span::styled(
                format!("({})", initial),
                Style::default().fg(Color::Cyan),
            )
        }
        None => Span::styled("(-)", Style::default().fg(Color::DarkGray)),
    }
}

/// One row of the issues list.
pub fn issue_row(issue: &Issue, is_focused: bool, today: Date) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            format!("#{:<3} ", issue.id),
            Style::default().fg(Color::DarkGray),
        ),
        kind_badge(issue.kind),
        Span::raw(" "),
        Span::styled(issue.title.clone(), Style::default().fg(Color::White)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        status_badge(issue.status),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        priority_span(issue.priority),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        due_date_span(issue.due_date, today),
        Span::raw(" "),
        avatar_span(issue.assignee.as_ref()),
    ];

    if is_focused {
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect::<String>();
        spans = vec![Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
    }

    Line::from(spans)
}

/// Text progress bar for the projects table.
pub fn progress_bar(percent: u8, width: usize) -> Vec<Span<'static>> {
    let filled = (percent as usize * width) / 100;
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled(
            "░".repeat(width.saturating_sub(filled)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!(" {:>3}%", percent), Style::default().fg(Color::White)),
    ]
}

/// Bottom controls bar used by every view.
pub fn controls_paragraph(pairs: &[(&str, &str)]) -> Paragraph<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, (keys, action)) in pairs.iter().enumerate() {
        spans.push(Span::styled(
            keys.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        let trailing = if i + 1 == pairs.len() { "" } else { "  " };
        spans.push(Span::raw(format!(": {}{}", action, trailing)));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        )
}

/// Parse a `#rrggbb` display color; anything malformed falls back to
/// white.
pub fn hex_color(hex: &str) -> Color {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 {
        return Color::White;
    }
    match (
        u8::from_str_radix(&raw[0..2], 16),
        u8::from_str_radix(&raw[2..4], 16),
        u8::from_str_radix(&raw[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn hex_colors_parse_or_fall_back() {
        assert_eq!(hex_color("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(hex_color("10b981"), Color::Rgb(0x10, 0xb9, 0x81));
        assert_eq!(hex_color("#nope"), Color::White);
        assert_eq!(hex_color(""), Color::White);
    }

    #[test]
    fn due_date_countdown_covers_all_buckets() {
        let today = date!(2024 - 03 - 15);
        assert_eq!(due_date_span(None, today).content, "-");
        assert_eq!(
            due_date_span(Some(date!(2024 - 03 - 18)), today).content,
            "D-3"
        );
        assert_eq!(due_date_span(Some(today), today).content, "D-day");
        assert_eq!(
            due_date_span(Some(date!(2024 - 03 - 13)), today).content,
            "D+2"
        );
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        let spans = progress_bar(50, 10);
        assert_eq!(spans[0].content.chars().count(), 5);
        assert_eq!(spans[1].content.chars().count(), 5);
        let spans = progress_bar(100, 10);
        assert_eq!(spans[0].content.chars().count(), 10);
        assert!(spans[1].content.is_empty());
    }
}

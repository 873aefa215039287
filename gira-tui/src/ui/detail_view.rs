use crate::app::{App, IssueEditState, IssueField, IssueForm};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::widgets;

pub fn render_detail(frame: &mut Frame, app: &App, body: Rect) {
    let Some(state) = &app.detail else {
        render_not_found(frame, app, body);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Status / priority / kind row
            Constraint::Length(2), // Assignee / due / labels row
            Constraint::Min(4),    // Description
            Constraint::Length(2), // Reporter + dates
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_title(frame, state, chunks[0]);
    render_field_rows(frame, state, chunks[1], chunks[2]);
    render_description(frame, state, chunks[3]);
    render_footer(frame, state, chunks[4]);

    let controls = if state.form.is_editing() {
        widgets::controls_paragraph(&[
            ("Enter", "Apply"),
            ("Esc", "Discard input"),
            ("Ctrl+S", "Save issue"),
        ])
    } else {
        widgets::controls_paragraph(&[
            ("Tab/j/k", "Field"),
            ("Enter", "Edit / cycle"),
            ("h/l", "Cycle value"),
            ("Ctrl+S", "Save"),
            ("Esc", "Back"),
        ])
    };
    frame.render_widget(controls, chunks[5]);
}

fn render_not_found(frame: &mut Frame, app: &App, body: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Issue not found",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!(
                "The requested issue \"{}\" does not exist or has been deleted.",
                app.detail_requested
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Esc: Back to issues",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        body,
    );
}

fn field_style(form: &IssueForm, field: IssueField) -> Style {
    if form.focused_field == field && !form.is_editing() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Field value in brackets, with a block cursor while its inline input is
/// open.
fn field_value(form: &IssueForm, field: IssueField, value: &str) -> Span<'static> {
    if form.focused_field == field {
        if let Some(input) = &form.text {
            let (before, after) = input.split_at_cursor();
            return Span::styled(
                format!("[{}█{}]", before, after),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
    let display = if value.is_empty() { "-" } else { value };
    Span::styled(format!("[{}]", display), field_style(form, field))
}

fn render_title(frame: &mut Frame, state: &IssueEditState, area: Rect) {
    let form = &state.form;
    let line = Line::from(vec![
        widgets::kind_badge(form.draft.kind),
        Span::styled(
            format!(" #{} ", state.issue.id),
            Style::default().fg(Color::DarkGray),
        ),
        field_value(form, IssueField::Title, &form.draft.title),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_field_rows(frame: &mut Frame, state: &IssueEditState, first: Rect, second: Rect) {
    let form = &state.form;
    let label = |text: &str| Span::styled(format!("{}: ", text), Style::default().fg(Color::DarkGray));

    let row1 = Line::from(vec![
        label("Status"),
        Span::styled(
            format!("[{}]", form.draft.status.label()),
            field_style(form, IssueField::Status),
        ),
        Span::raw("   "),
        label("Priority"),
        Span::styled(
            format!("[{}]", form.draft.priority.label()),
            field_style(form, IssueField::Priority),
        ),
        Span::raw("   "),
        label("Type"),
        Span::styled(
            format!("[{}]", form.draft.kind.label()),
            field_style(form, IssueField::Kind),
        ),
    ]);
    frame.render_widget(Paragraph::new(row1), first);

    let assignee = form
        .draft
        .assignee
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Unassigned".to_string());
    let due = form
        .draft
        .due_date
        .map(|d| d.to_string())
        .unwrap_or_default();
    let labels = form.draft.labels.join(", ");

    let row2 = Line::from(vec![
        label("Assignee"),
        Span::styled(
            format!("[{}]", assignee),
            field_style(form, IssueField::Assignee),
        ),
        Span::raw("   "),
        label("Due"),
        field_value(form, IssueField::DueDate, &due),
        Span::raw("   "),
        label("Labels"),
        field_value(form, IssueField::Labels, &labels),
    ]);
    frame.render_widget(Paragraph::new(row2), second);
}

fn render_description(frame: &mut Frame, state: &IssueEditState, area: Rect) {
    let form = &state.form;
    let focused = form.focused_field == IssueField::Description;
    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = if focused && form.is_editing() {
        let input = form.text.as_ref().expect("editing implies input");
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else if form.draft.description.is_empty() {
        "No description".to_string()
    } else {
        form.draft.description.clone()
    };

    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(" Description ")
                    .padding(Padding::horizontal(1)),
            ),
        area,
    );
}

fn render_footer(frame: &mut Frame, state: &IssueEditState, area: Rect) {
    let issue = &state.issue;
    let line = Line::from(vec![
        Span::styled("Reporter ", Style::default().fg(Color::DarkGray)),
        widgets::avatar_span(Some(&issue.reporter)),
        Span::styled(
            format!(" {}", issue.reporter.name),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "   Project {}   Created {}   Updated {}",
                issue.project_name,
                issue.created_at.date(),
                issue.updated_at.date()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

use crate::app::{App, IssueField, IssueForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use super::utils::centered_rect;

pub fn render_create_dialog(frame: &mut Frame, app: &App, body: Rect) {
    let Some(state) = &app.create else {
        return;
    };
    let form = &state.form;

    let area = centered_rect(72, 18, body);
    frame.render_widget(Clear, area);

    let project_name = app
        .backend
        .project(&state.project_id)
        .map(|p| p.name)
        .unwrap_or_else(|| state.project_id.clone());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Project: {}", project_name),
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        field_line(form, IssueField::Title, "Title", &form.draft.title),
        field_line(
            form,
            IssueField::Status,
            "Status",
            form.draft.status.label(),
        ),
        field_line(
            form,
            IssueField::Priority,
            "Priority",
            form.draft.priority.label(),
        ),
        field_line(form, IssueField::Kind, "Type", form.draft.kind.label()),
        field_line(
            form,
            IssueField::Assignee,
            "Assignee",
            &form
                .draft
                .assignee
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Unassigned".to_string()),
        ),
        field_line(
            form,
            IssueField::DueDate,
            "Due date",
            &form
                .draft
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        ),
        field_line(form, IssueField::Labels, "Labels", &form.draft.labels.join(", ")),
        field_line(
            form,
            IssueField::Description,
            "Description",
            &form.draft.description,
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": Next field  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Edit / cycle  "),
            Span::styled("Ctrl+S", Style::default().fg(Color::Yellow)),
            Span::raw(": Create  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancel"),
        ]),
    ];

    if form.draft.title.trim().is_empty() {
        lines.insert(
            lines.len() - 2,
            Line::from(Span::styled(
                "Title is required",
                Style::default().fg(Color::Red),
            )),
        );
    }

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " New issue ",
                Style::default().fg(Color::Yellow),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(dialog, area);
}

fn field_line(
    form: &IssueForm,
    field: IssueField,
    label: &str,
    value: &str,
) -> Line<'static> {
    let focused = form.focused_field == field;
    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_span = if focused && form.is_editing() {
        let input = form.text.as_ref().expect("editing implies input");
        let (before, after) = input.split_at_cursor();
        Span::styled(
            format!("[{}█{}]", before, after),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        let display = if value.is_empty() { "-" } else { value };
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("[{}]", display), style)
    };

    Line::from(vec![
        Span::styled(format!("{:<12}", label), label_style),
        value_span,
    ])
}

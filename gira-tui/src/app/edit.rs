use super::*;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Editable issue form shared by the detail view and the create dialog:
/// a draft, a focused field, and an optional inline text input.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueForm {
    pub draft: IssueDraft,
    pub focused_field: IssueField,
    pub text: Option<TextInput>,
}

impl IssueForm {
    pub fn new(draft: IssueDraft) -> Self {
        Self {
            draft,
            focused_field: IssueField::Title,
            text: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.text.is_some()
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Open the inline input for the focused text field, seeded from the
    /// draft. Non-text fields cycle instead (see [`IssueForm::cycle_value`]).
    pub fn begin_edit(&mut self) {
        if !self.focused_field.is_text() {
            return;
        }
        let seed = match self.focused_field {
            IssueField::Title => self.draft.title.clone(),
            IssueField::Description => self.draft.description.clone(),
            IssueField::Labels => self.draft.labels.join(", "),
            IssueField::DueDate => self
                .draft
                .due_date
                .and_then(|d| d.format(DATE_FORMAT).ok())
                .unwrap_or_default(),
            _ => unreachable!(),
        };
        self.text = Some(TextInput::from_str(&seed));
    }

    /// Write the inline input back into the draft. Keeps editing and
    /// returns the message when the value doesn't parse.
    pub fn commit_edit(&mut self) -> Result<(), String> {
        let Some(input) = &self.text else {
            return Ok(());
        };
        let value = input.value.clone();
        match self.focused_field {
            IssueField::Title => self.draft.title = value,
            IssueField::Description => self.draft.description = value,
            IssueField::Labels => {
                self.draft.labels = value
                    .split(',')
                    .map(|label| label.trim().to_string())
                    .filter(|label| !label.is_empty())
                    .collect();
            }
            IssueField::DueDate => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    self.draft.due_date = None;
                } else {
                    let date = Date::parse(trimmed, DATE_FORMAT)
                        .map_err(|_| "Invalid due date (use YYYY-MM-DD)".to_string())?;
                    self.draft.due_date = Some(date);
                }
            }
            _ => {}
        }
        self.text = None;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.text = None;
    }

    /// Cycle the focused enum field (status/priority/kind) or the
    /// assignee (None plus every known user).
    pub fn cycle_value(&mut self, forward: bool, users: &[User]) {
        match self.focused_field {
            IssueField::Status => {
                self.draft.status = cycle(&IssueStatus::ALL, self.draft.status, forward);
            }
            IssueField::Priority => {
                self.draft.priority = cycle(&Priority::ALL, self.draft.priority, forward);
            }
            IssueField::Kind => {
                self.draft.kind = cycle(&IssueKind::ALL, self.draft.kind, forward);
            }
            IssueField::Assignee => {
                let mut options: Vec<Option<User>> = vec![None];
                options.extend(users.iter().cloned().map(Some));
                let current = options
                    .iter()
                    .position(|o| {
                        o.as_ref().map(|u| u.id.as_str())
                            == self.draft.assignee.as_ref().map(|u| u.id.as_str())
                    })
                    .unwrap_or(0);
                let next = if forward {
                    (current + 1) % options.len()
                } else {
                    (current + options.len() - 1) % options.len()
                };
                self.draft.assignee = options[next].clone();
            }
            _ => {}
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(input) = &mut self.text {
            input.insert(c);
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(input) = &mut self.text {
            input.backspace();
        }
    }

    pub fn input_move_cursor(&mut self, left: bool) {
        if let Some(input) = &mut self.text {
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else {
        (idx + all.len() - 1) % all.len()
    };
    all[next]
}

/// Detail-page state: the issue as loaded plus the editable form.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueEditState {
    pub issue: Issue,
    pub form: IssueForm,
}

impl IssueEditState {
    pub fn new(issue: Issue) -> Self {
        let form = IssueForm::new(IssueDraft::from_issue(&issue));
        Self { issue, form }
    }
}

/// Create-dialog state: the target project plus the form.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIssueState {
    pub project_id: String,
    pub form: IssueForm,
}

impl CreateIssueState {
    pub fn new(project_id: String) -> Self {
        Self {
            project_id,
            form: IssueForm::new(IssueDraft::new_task()),
        }
    }
}

impl App {
    /// Save the detail draft through the backend and reload the page state
    /// from the stored issue.
    pub fn save_detail(&mut self) {
        let Some((id, mut form)) = self
            .detail
            .as_ref()
            .map(|s| (s.issue.id.clone(), s.form.clone()))
        else {
            return;
        };
        if form.is_editing() {
            if let Err(message) = form.commit_edit() {
                self.set_status(message);
                return;
            }
        }
        match self.backend.update_issue(&id, form.draft.clone()) {
            Ok(updated) => {
                self.set_status(format!("Issue #{} saved", updated.id));
                self.detail = Some(IssueEditState::new(updated));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Submit the create dialog; on success jump to the new issue's detail
    /// page.
    pub fn create_submit(&mut self) {
        let Some((project_id, mut form)) = self
            .create
            .as_ref()
            .map(|s| (s.project_id.clone(), s.form.clone()))
        else {
            return;
        };
        if form.is_editing() {
            if let Err(message) = form.commit_edit() {
                self.set_status(message);
                return;
            }
        }
        if form.draft.title.trim().is_empty() {
            self.set_status("Title is required".to_string());
            return;
        }
        let reporter = self.current_user.clone();
        match self.backend.create_issue(&project_id, reporter, form.draft) {
            Ok(issue) => {
                self.create = None;
                self.open_detail(issue.id.clone());
                self.set_status(format!("Issue #{} created", issue.id));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn cancel_create(&mut self) {
        self.create = None;
        self.navigate_to(View::Issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GiraConfig;
    use gira_core::MockBackend;
    use time::macros::date;

    fn form() -> IssueForm {
        IssueForm::new(IssueDraft::new_task())
    }

    #[test]
    fn title_edit_round_trips_through_text_input() {
        let mut form = form();
        form.focused_field = IssueField::Title;
        form.begin_edit();
        for c in "Ship it".chars() {
            form.input_char(c);
        }
        form.commit_edit().unwrap();
        assert_eq!(form.draft.title, "Ship it");
        assert!(!form.is_editing());
    }

    #[test]
    fn due_date_parses_or_reports() {
        let mut form = form();
        form.focused_field = IssueField::DueDate;
        form.text = Some(TextInput::from_str("2024-03-20"));
        form.commit_edit().unwrap();
        assert_eq!(form.draft.due_date, Some(date!(2024 - 03 - 20)));

        form.text = Some(TextInput::from_str("next tuesday"));
        assert!(form.commit_edit().is_err());
        assert!(form.is_editing(), "bad input keeps the editor open");

        form.text = Some(TextInput::from_str("  "));
        form.commit_edit().unwrap();
        assert_eq!(form.draft.due_date, None);
    }

    #[test]
    fn labels_split_on_commas_and_drop_blanks() {
        let mut form = form();
        form.focused_field = IssueField::Labels;
        form.text = Some(TextInput::from_str("frontend, auth , ,ui"));
        form.commit_edit().unwrap();
        assert_eq!(form.draft.labels, vec!["frontend", "auth", "ui"]);
    }

    #[test]
    fn enum_fields_cycle_and_wrap() {
        let mut form = form();
        form.focused_field = IssueField::Status;
        assert_eq!(form.draft.status, IssueStatus::Open);
        form.cycle_value(true, &[]);
        assert_eq!(form.draft.status, IssueStatus::InProgress);
        form.cycle_value(false, &[]);
        form.cycle_value(false, &[]);
        assert_eq!(form.draft.status, IssueStatus::Closed);
    }

    #[test]
    fn assignee_cycles_through_none_and_users() {
        let backend = MockBackend::new();
        let users = backend.users();
        let mut form = form();
        form.focused_field = IssueField::Assignee;

        assert!(form.draft.assignee.is_none());
        form.cycle_value(true, &users);
        assert_eq!(form.draft.assignee.as_ref().unwrap().id, users[0].id);
        for _ in 0..users.len() {
            form.cycle_value(true, &users);
        }
        assert!(form.draft.assignee.is_none(), "wraps back to unassigned");
    }

    #[test]
    fn save_detail_persists_through_backend() {
        let mut app = App::new(MockBackend::new(), &GiraConfig::default());
        app.open_detail("1");

        let form = &mut app.detail.as_mut().unwrap().form;
        form.focused_field = IssueField::Title;
        form.begin_edit();
        form.text = Some(TextInput::from_str("Reworked login flow"));
        app.save_detail();

        assert_eq!(app.backend.issue("1").unwrap().title, "Reworked login flow");
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .contains("Issue #1 saved"));
    }

    #[test]
    fn create_requires_a_title() {
        let mut app = App::new(MockBackend::new(), &GiraConfig::default());
        app.navigate_to(View::CreateIssue);
        let count = app.backend.issues().len();

        app.create_submit();
        assert_eq!(app.backend.issues().len(), count);
        assert_eq!(app.status_message.as_deref(), Some("Title is required"));

        let form = &mut app.create.as_mut().unwrap().form;
        form.draft.title = "Add health endpoint".to_string();
        app.create_submit();
        assert_eq!(app.backend.issues().len(), count + 1);
        assert_eq!(app.current_view, View::IssueDetail);
        assert!(app.create.is_none());
    }
}

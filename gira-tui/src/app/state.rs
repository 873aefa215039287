use gira_core::{days_until, Issue, IssueStatus};
use time::Date;

/// The pages of the tracker plus the two modal views (project selector,
/// create dialog) that temporarily replace them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    Issues,
    IssueDetail,
    Board,
    Projects,
    SelectProject,
    CreateIssue,
}

/// Fields of the issue form, shared by the detail view and the create
/// dialog. Order here is the Tab cycling order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IssueField {
    Title,
    Status,
    Priority,
    Kind,
    Assignee,
    DueDate,
    Labels,
    Description,
}

impl IssueField {
    pub const ALL: [IssueField; 8] = [
        IssueField::Title,
        IssueField::Status,
        IssueField::Priority,
        IssueField::Kind,
        IssueField::Assignee,
        IssueField::DueDate,
        IssueField::Labels,
        IssueField::Description,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Text fields open an inline input on Enter; the rest cycle values.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            IssueField::Title | IssueField::DueDate | IssueField::Labels | IssueField::Description
        )
    }
}

/// A card lifted off the board, between pick-up and drop. The issue stays
/// in its source column until the drop lands.
#[derive(Debug, Clone, PartialEq)]
pub struct CarriedCard {
    pub issue_id: String,
    pub title: String,
    pub from: String,
}

/// Dashboard numbers, recomputed when the view is entered or the project
/// scope changes, then served to every render frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub by_status: Vec<(IssueStatus, usize)>,
    pub due_soon: usize,
    pub my_issues: Vec<Issue>,
    pub total: usize,
}

impl DashboardStats {
    /// `scope` limits the stats to one project; `me` selects the issues
    /// listed under "My issues". Due soon = due strictly within the next
    /// three days (not today, not overdue).
    pub fn compute(issues: &[Issue], scope: Option<&str>, me: &str, today: Date) -> Self {
        let scoped: Vec<&Issue> = issues
            .iter()
            .filter(|i| scope.map(|p| i.project_id == p).unwrap_or(true))
            .collect();

        let by_status = IssueStatus::ALL
            .iter()
            .map(|status| {
                let count = scoped.iter().filter(|i| i.status == *status).count();
                (*status, count)
            })
            .collect();

        let due_soon = scoped
            .iter()
            .filter(|i| {
                i.due_date
                    .map(|due| {
                        let days = days_until(due, today);
                        days > 0 && days < 3
                    })
                    .unwrap_or(false)
            })
            .count();

        let my_issues = scoped
            .iter()
            .filter(|i| i.assignee.as_ref().map(|a| a.id == me).unwrap_or(false))
            .map(|i| (*i).clone())
            .collect();

        Self {
            by_status,
            due_soon,
            my_issues,
            total: scoped.len(),
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Move cursor one char to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    /// Move cursor one char to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gira_core::{fixtures, MockBackend};
    use time::OffsetDateTime;

    #[test]
    fn field_cycle_wraps_both_ways() {
        assert_eq!(IssueField::Description.next(), IssueField::Title);
        assert_eq!(IssueField::Title.prev(), IssueField::Description);
        let mut field = IssueField::Title;
        for _ in 0..IssueField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, IssueField::Title);
    }

    #[test]
    fn dashboard_counts_follow_scope() {
        let backend = MockBackend::new();
        let issues = backend.issues();
        let today = OffsetDateTime::now_utc().date();

        let all = DashboardStats::compute(&issues, None, "1", today);
        assert_eq!(all.total, issues.len());
        let counted: usize = all.by_status.iter().map(|(_, n)| n).sum();
        assert_eq!(counted, all.total);

        let scoped = DashboardStats::compute(&issues, Some("1"), "1", today);
        assert_eq!(
            scoped.total,
            issues.iter().filter(|i| i.project_id == "1").count()
        );
        assert!(scoped
            .my_issues
            .iter()
            .all(|i| i.assignee.as_ref().map(|a| a.id.as_str()) == Some("1")));
    }

    #[test]
    fn due_soon_excludes_today_and_overdue() {
        let users = fixtures::seed_users();
        let projects = fixtures::seed_projects();
        let issues = fixtures::seed_issues(&users, &projects);
        let today = OffsetDateTime::now_utc().date();

        let stats = DashboardStats::compute(&issues, None, "1", today);
        let expected = issues
            .iter()
            .filter_map(|i| i.due_date)
            .filter(|due| {
                let days = days_until(*due, today);
                days > 0 && days < 3
            })
            .count();
        assert_eq!(stats.due_soon, expected);
        assert!(expected > 0, "fixtures should keep the bucket populated");
    }

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::from_str("abc");
        input.move_left();
        input.insert('x');
        assert_eq!(input.value, "abxc");
        input.backspace();
        assert_eq!(input.value, "abc");
        input.home();
        input.insert('>');
        assert_eq!(input.value, ">abc");
        assert_eq!(input.split_at_cursor(), (">", "abc"));
    }
}

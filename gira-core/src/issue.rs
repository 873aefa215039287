use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use crate::types::User;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Workflow state of an issue. The wire form is snake_case, matching the
/// board columns' status values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Open => "To Do",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "In Review",
            IssueStatus::Closed => "Done",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueKind {
    Bug,
    Feature,
    Task,
    Improvement,
}

impl IssueKind {
    pub const ALL: [IssueKind; 4] = [
        IssueKind::Bug,
        IssueKind::Feature,
        IssueKind::Task,
        IssueKind::Improvement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Bug => "Bug",
            IssueKind::Feature => "Feature",
            IssueKind::Task => "Task",
            IssueKind::Improvement => "Improvement",
        }
    }
}

/// A tracked issue. Belongs to exactly one project; the assignee and due
/// date are optional and rendered as placeholders when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project_id: String,
    pub project_name: String,
    pub reporter: User,
    pub assignee: Option<User>,
    pub status: IssueStatus,
    pub priority: Priority,
    pub kind: IssueKind,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub labels: Vec<String>,
    #[serde(with = "iso_date::option")]
    pub due_date: Option<Date>,
}

/// The editable subset of an issue, used by the detail view's draft and
/// the create dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: Priority,
    pub kind: IssueKind,
    pub assignee: Option<User>,
    pub labels: Vec<String>,
    pub due_date: Option<Date>,
}

impl IssueDraft {
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            title: issue.title.clone(),
            description: issue.description.clone(),
            status: issue.status,
            priority: issue.priority,
            kind: issue.kind,
            assignee: issue.assignee.clone(),
            labels: issue.labels.clone(),
            due_date: issue.due_date,
        }
    }

    /// Defaults for the create dialog: a task, medium priority, open.
    pub fn new_task() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: IssueStatus::Open,
            priority: Priority::Medium,
            kind: IssueKind::Task,
            assignee: None,
            labels: Vec::new(),
            due_date: None,
        }
    }
}

/// Facet filter over issues. Every set facet must match; unset facets
/// match everything. `search` is a case-insensitive substring match over
/// title and description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilter {
    pub search: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<Priority>,
    pub kind: Option<IssueKind>,
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
    pub labels: Vec<String>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !issue.title.to_lowercase().contains(&needle)
                && !issue.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if issue.priority != priority {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if issue.kind != kind {
                return false;
            }
        }
        if let Some(project_id) = &self.project_id {
            if &issue.project_id != project_id {
                return false;
            }
        }
        if let Some(assignee_id) = &self.assignee_id {
            match &issue.assignee {
                Some(assignee) if &assignee.id == assignee_id => {}
                _ => return false,
            }
        }
        self.labels
            .iter()
            .all(|label| issue.labels.iter().any(|l| l == label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn issues() -> Vec<Issue> {
        fixtures::seed_issues(&fixtures::seed_users(), &fixtures::seed_projects())
    }

    #[test]
    fn empty_filter_matches_everything() {
        let issues = issues();
        let filter = IssueFilter::default();
        assert!(issues.iter().all(|i| filter.matches(i)));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let issues = issues();
        let filter = IssueFilter {
            search: Some("LOGIN".to_string()),
            ..Default::default()
        };
        let hits: Vec<_> = issues.iter().filter(|i| filter.matches(i)).collect();
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|i| {
            i.title.to_lowercase().contains("login") || i.description.to_lowercase().contains("login")
        }));
    }

    #[test]
    fn facets_combine_conjunctively() {
        let issues = issues();
        let filter = IssueFilter {
            status: Some(IssueStatus::Open),
            project_id: Some("1".to_string()),
            ..Default::default()
        };
        for issue in issues.iter().filter(|i| filter.matches(i)) {
            assert_eq!(issue.status, IssueStatus::Open);
            assert_eq!(issue.project_id, "1");
        }
    }

    #[test]
    fn label_facet_requires_all_labels() {
        let issues = issues();
        let filter = IssueFilter {
            labels: vec!["frontend".to_string(), "auth".to_string()],
            ..Default::default()
        };
        for issue in issues.iter().filter(|i| filter.matches(i)) {
            assert!(issue.labels.iter().any(|l| l == "frontend"));
            assert!(issue.labels.iter().any(|l| l == "auth"));
        }
    }

    #[test]
    fn status_round_trips_through_wire_form() {
        for status in IssueStatus::ALL {
            let wire = status.to_string();
            assert_eq!(wire.parse::<IssueStatus>().unwrap(), status);
        }
        assert_eq!(IssueStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn issue_serializes_with_snake_case_enums_and_iso_dates() {
        let issues = issues();
        let issue = issues.iter().find(|i| i.id == "1").unwrap();
        let value = serde_json::to_value(issue).unwrap();

        assert_eq!(value["status"], "open");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["kind"], "feature");
        let due = value["due_date"].as_str().unwrap();
        assert_eq!(due.len(), "2024-03-15".len());

        let back: Issue = serde_json::from_value(value).unwrap();
        assert_eq!(&back, issue);
    }
}

use thiserror::Error;
use time::OffsetDateTime;

use crate::fixtures;
use crate::issue::{Issue, IssueDraft};
use crate::project::Project;
use crate::status::{default_columns, StatusColumn};
use crate::types::{ActivityEntry, Notification, User};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("issue not found: {0}")]
    IssueNotFound(String),
    #[error("project not found: {0}")]
    ProjectNotFound(String),
}

/// In-memory substitute for a real backend, seeded from static fixtures.
///
/// Read accessors hand out fresh clones so that every page mount derives
/// its own state; mutating page-local copies never leaks across pages.
/// Write operations exist for the session only; nothing is persisted.
#[derive(Debug, Clone)]
pub struct MockBackend {
    users: Vec<User>,
    projects: Vec<Project>,
    columns: Vec<StatusColumn>,
    issues: Vec<Issue>,
    notifications: Vec<Notification>,
    activity: Vec<ActivityEntry>,
    next_issue_id: u32,
    next_activity_id: u32,
}

impl MockBackend {
    pub fn new() -> Self {
        let users = fixtures::seed_users();
        let projects = fixtures::seed_projects();
        let issues = fixtures::seed_issues(&users, &projects);
        let next_issue_id = issues
            .iter()
            .filter_map(|i| i.id.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let activity = fixtures::seed_activity();
        let next_activity_id = activity.iter().map(|a| a.id).max().unwrap_or(0) + 1;

        Self {
            users,
            projects,
            columns: default_columns(),
            issues,
            notifications: fixtures::seed_notifications(),
            activity,
            next_issue_id,
            next_activity_id,
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn project(&self, id: &str) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn status_columns(&self) -> Vec<StatusColumn> {
        self.columns.clone()
    }

    pub fn issues(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    pub fn issue(&self, id: &str) -> Option<Issue> {
        self.issues.iter().find(|i| i.id == id).cloned()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    pub fn activity_log(&self) -> Vec<ActivityEntry> {
        self.activity.clone()
    }

    /// Apply an edited draft to an existing issue and stamp `updated_at`.
    #[tracing::instrument(skip(self, draft))]
    pub fn update_issue(&mut self, id: &str, draft: IssueDraft) -> Result<Issue, BackendError> {
        let issue = self
            .issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| BackendError::IssueNotFound(id.to_string()))?;

        issue.title = draft.title;
        issue.description = draft.description;
        issue.status = draft.status;
        issue.priority = draft.priority;
        issue.kind = draft.kind;
        issue.assignee = draft.assignee;
        issue.labels = draft.labels;
        issue.due_date = draft.due_date;
        issue.updated_at = OffsetDateTime::now_utc();

        let updated = issue.clone();
        self.record_activity(format!("Issue #{} \"{}\" updated", updated.id, updated.title));
        Ok(updated)
    }

    /// Create a new issue from a draft, assigning the next numeric id.
    #[tracing::instrument(skip(self, draft))]
    pub fn create_issue(
        &mut self,
        project_id: &str,
        reporter: User,
        draft: IssueDraft,
    ) -> Result<Issue, BackendError> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| BackendError::ProjectNotFound(project_id.to_string()))?;

        let now = OffsetDateTime::now_utc();
        let issue = Issue {
            id: self.next_issue_id.to_string(),
            title: draft.title,
            description: draft.description,
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            reporter,
            assignee: draft.assignee,
            status: draft.status,
            priority: draft.priority,
            kind: draft.kind,
            created_at: now,
            updated_at: now,
            labels: draft.labels,
            due_date: draft.due_date,
        };
        self.next_issue_id += 1;
        self.issues.push(issue.clone());
        self.record_activity(format!("Issue #{} \"{}\" created", issue.id, issue.title));
        Ok(issue)
    }

    fn record_activity(&mut self, text: String) {
        self.activity.insert(
            0,
            ActivityEntry {
                id: self.next_activity_id,
                text,
                date: OffsetDateTime::now_utc().date(),
            },
        );
        self.next_activity_id += 1;
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueKind, IssueStatus, Priority};

    #[test]
    fn accessors_hand_out_independent_copies() {
        let backend = MockBackend::new();
        let mut first = backend.issues();
        first[0].title = "locally mutated".to_string();
        let second = backend.issues();
        assert_ne!(first[0].title, second[0].title);
    }

    #[test]
    fn unknown_issue_lookup_returns_none() {
        let backend = MockBackend::new();
        assert!(backend.issue("999").is_none());
    }

    #[test]
    fn update_applies_draft_and_stamps_updated_at() {
        let mut backend = MockBackend::new();
        let before = backend.issue("1").unwrap();

        let mut draft = IssueDraft::from_issue(&before);
        draft.title = "Implement login and session handling".to_string();
        draft.status = IssueStatus::InProgress;
        draft.priority = Priority::Urgent;

        let updated = backend.update_issue("1", draft).unwrap();
        assert_eq!(updated.title, "Implement login and session handling");
        assert_eq!(updated.status, IssueStatus::InProgress);
        assert_eq!(updated.priority, Priority::Urgent);
        assert!(updated.updated_at >= before.updated_at);
        assert_eq!(backend.issue("1").unwrap(), updated);
    }

    #[test]
    fn update_of_unknown_issue_fails() {
        let mut backend = MockBackend::new();
        let draft = IssueDraft::new_task();
        assert!(matches!(
            backend.update_issue("999", draft),
            Err(BackendError::IssueNotFound(_))
        ));
    }

    #[test]
    fn create_assigns_sequential_ids_and_project_name() {
        let mut backend = MockBackend::new();
        let reporter = backend.user("1").unwrap();
        let count = backend.issues().len();

        let mut draft = IssueDraft::new_task();
        draft.title = "Add audit logging".to_string();
        draft.kind = IssueKind::Feature;

        let created = backend
            .create_issue("2", reporter.clone(), draft.clone())
            .unwrap();
        assert_eq!(created.project_name, backend.project("2").unwrap().name);
        assert_eq!(backend.issues().len(), count + 1);

        let next = backend.create_issue("2", reporter, draft).unwrap();
        assert_eq!(
            next.id.parse::<u32>().unwrap(),
            created.id.parse::<u32>().unwrap() + 1
        );
    }

    #[test]
    fn create_in_unknown_project_fails() {
        let mut backend = MockBackend::new();
        let reporter = backend.user("1").unwrap();
        assert!(matches!(
            backend.create_issue("42", reporter, IssueDraft::new_task()),
            Err(BackendError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn mutations_are_recorded_in_the_activity_log() {
        let mut backend = MockBackend::new();
        let reporter = backend.user("1").unwrap();
        let before = backend.activity_log().len();

        let mut draft = IssueDraft::new_task();
        draft.title = "Track activity".to_string();
        backend.create_issue("1", reporter, draft).unwrap();

        let log = backend.activity_log();
        assert_eq!(log.len(), before + 1);
        assert!(log[0].text.contains("created"));
    }
}

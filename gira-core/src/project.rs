use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use crate::issue::{Issue, IssueStatus};
use crate::types::User;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Archived,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Archived => "Archived",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MemberRole {
    Admin,
    Member,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub id: String,
    pub name: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: User,
    pub status: ProjectStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub members: Vec<ProjectMember>,
    pub tags: Vec<String>,
}

impl Project {
    /// Percentage of this project's issues that are resolved or closed,
    /// shown as the progress column on the projects page. A project with
    /// no issues counts as 0%.
    pub fn progress(&self, issues: &[Issue]) -> u8 {
        let mine: Vec<_> = issues.iter().filter(|i| i.project_id == self.id).collect();
        if mine.is_empty() {
            return 0;
        }
        let done = mine
            .iter()
            .filter(|i| matches!(i.status, IssueStatus::Resolved | IssueStatus::Closed))
            .count();
        (done * 100 / mine.len()) as u8
    }
}

/// Facet filter over projects, mirroring the issue filter: substring
/// search over name and description plus optional facets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub status: Option<ProjectStatus>,
    pub owner_id: Option<String>,
    pub tags: Vec<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !project.name.to_lowercase().contains(&needle)
                && !project.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        if let Some(owner_id) = &self.owner_id {
            if &project.owner.id != owner_id {
                return false;
            }
        }
        self.tags
            .iter()
            .all(|tag| project.tags.iter().any(|t| t == tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn progress_counts_resolved_and_closed() {
        let users = fixtures::seed_users();
        let projects = fixtures::seed_projects();
        let issues = fixtures::seed_issues(&users, &projects);

        for project in &projects {
            let mine: Vec<_> = issues
                .iter()
                .filter(|i| i.project_id == project.id)
                .collect();
            let done = mine
                .iter()
                .filter(|i| matches!(i.status, IssueStatus::Resolved | IssueStatus::Closed))
                .count();
            let expected = if mine.is_empty() {
                0
            } else {
                (done * 100 / mine.len()) as u8
            };
            assert_eq!(project.progress(&issues), expected);
        }
    }

    #[test]
    fn progress_of_empty_project_is_zero() {
        let projects = fixtures::seed_projects();
        assert_eq!(projects[0].progress(&[]), 0);
    }

    #[test]
    fn status_filter_selects_only_matching_projects() {
        let projects = fixtures::seed_projects();
        let filter = ProjectFilter {
            status: Some(ProjectStatus::Active),
            ..Default::default()
        };
        for project in projects.iter().filter(|p| filter.matches(p)) {
            assert_eq!(project.status, ProjectStatus::Active);
        }
    }

    #[test]
    fn search_matches_description_too() {
        let projects = fixtures::seed_projects();
        let filter = ProjectFilter {
            search: Some("performance".to_string()),
            ..Default::default()
        };
        assert!(projects.iter().any(|p| filter.matches(p)));
    }
}

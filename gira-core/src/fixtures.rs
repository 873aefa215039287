//! Static mock data substituting for a real backend. Seeded once per
//! backend construction; due dates and timestamps are laid out relative
//! to the current day so the dashboard's due-soon bucket stays populated.

use time::{Duration, OffsetDateTime};

use crate::issue::{Issue, IssueKind, IssueStatus, Priority};
use crate::project::{MemberRole, Project, ProjectMember, ProjectStatus};
use crate::types::{ActivityEntry, Notification, User};

pub fn seed_users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    };

    vec![
        user("1", "Alice Park", "alice@example.com"),
        user("2", "Ben Carter", "ben@example.com"),
        user("3", "Chloe Lee", "chloe@example.com"),
    ]
}

pub fn seed_projects() -> Vec<Project> {
    let users = seed_users();
    let now = OffsetDateTime::now_utc();

    let member = |user: &User, role: MemberRole| ProjectMember {
        id: user.id.clone(),
        name: user.name.clone(),
        role,
    };

    vec![
        Project {
            id: "1".to_string(),
            name: "2024 New Service".to_string(),
            description: "Greenfield development of the new customer-facing service".to_string(),
            owner: users[0].clone(),
            status: ProjectStatus::Active,
            created_at: now - Duration::days(30),
            updated_at: now - Duration::days(1),
            members: vec![
                member(&users[0], MemberRole::Admin),
                member(&users[1], MemberRole::Member),
                member(&users[2], MemberRole::Viewer),
            ],
            tags: vec!["new".to_string(), "service".to_string()],
        },
        Project {
            id: "2".to_string(),
            name: "Platform Improvements".to_string(),
            description: "Performance and stability work on the existing platform".to_string(),
            owner: users[1].clone(),
            status: ProjectStatus::Completed,
            created_at: now - Duration::days(90),
            updated_at: now - Duration::days(7),
            members: vec![member(&users[1], MemberRole::Admin)],
            tags: vec!["performance".to_string(), "platform".to_string()],
        },
        Project {
            id: "3".to_string(),
            name: "Legacy Migration".to_string(),
            description: "Retired migration effort for the old billing stack".to_string(),
            owner: users[2].clone(),
            status: ProjectStatus::Archived,
            created_at: now - Duration::days(365),
            updated_at: now - Duration::days(120),
            members: vec![
                member(&users[2], MemberRole::Admin),
                member(&users[0], MemberRole::Member),
            ],
            tags: vec!["legacy".to_string()],
        },
    ]
}

pub fn seed_issues(users: &[User], projects: &[Project]) -> Vec<Issue> {
    let now = OffsetDateTime::now_utc();
    let today = now.date();

    let issue = |id: &str,
                 title: &str,
                 description: &str,
                 project: &Project,
                 reporter: &User,
                 assignee: Option<&User>,
                 status: IssueStatus,
                 priority: Priority,
                 kind: IssueKind,
                 age_days: i64,
                 due_in_days: Option<i64>,
                 labels: &[&str]| Issue {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        reporter: reporter.clone(),
        assignee: assignee.cloned(),
        status,
        priority,
        kind,
        created_at: now - Duration::days(age_days),
        updated_at: now - Duration::days(age_days / 2),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        due_date: due_in_days.map(|d| today + Duration::days(d)),
    };

    vec![
        issue(
            "1",
            "Implement login flow",
            "User authentication and login for the new service",
            &projects[0],
            &users[0],
            Some(&users[1]),
            IssueStatus::Open,
            Priority::High,
            IssueKind::Feature,
            5,
            Some(1),
            &["frontend", "auth"],
        ),
        issue(
            "2",
            "Fix intermittent data loading failure",
            "Requests occasionally fail while loading the issue list",
            &projects[0],
            &users[1],
            Some(&users[2]),
            IssueStatus::Open,
            Priority::Medium,
            IssueKind::Bug,
            6,
            Some(2),
            &["backend", "bug"],
        ),
        issue(
            "3",
            "Design database schema",
            "ERD and table design for the service data model",
            &projects[0],
            &users[1],
            Some(&users[0]),
            IssueStatus::InProgress,
            Priority::Medium,
            IssueKind::Task,
            7,
            Some(-1),
            &["backend"],
        ),
        issue(
            "4",
            "Responsive layout cleanup",
            "Improve rendering on narrow viewports",
            &projects[1],
            &users[2],
            Some(&users[0]),
            IssueStatus::Resolved,
            Priority::Low,
            IssueKind::Improvement,
            9,
            Some(0),
            &["frontend", "ui"],
        ),
        issue(
            "5",
            "Wire up external API integration",
            "Connect the webhook receiver to the notification pipeline",
            &projects[0],
            &users[0],
            Some(&users[0]),
            IssueStatus::InProgress,
            Priority::High,
            IssueKind::Feature,
            4,
            Some(3),
            &["backend", "integration"],
        ),
        issue(
            "6",
            "Write operator documentation",
            "Runbook for deploying and operating the service",
            &projects[1],
            &users[1],
            Some(&users[0]),
            IssueStatus::Open,
            Priority::Low,
            IssueKind::Task,
            3,
            Some(5),
            &["docs"],
        ),
        issue(
            "7",
            "Main page design review",
            "Review the landing page design with the design team",
            &projects[1],
            &users[2],
            Some(&users[2]),
            IssueStatus::Closed,
            Priority::Low,
            IssueKind::Improvement,
            14,
            None,
            &["design"],
        ),
        issue(
            "8",
            "Billing export performance regression",
            "Nightly export takes twice as long since the last release",
            &projects[2],
            &users[0],
            None,
            IssueStatus::Open,
            Priority::Urgent,
            IssueKind::Bug,
            2,
            Some(-3),
            &["billing", "performance"],
        ),
    ]
}

pub fn seed_notifications() -> Vec<Notification> {
    let now = OffsetDateTime::now_utc();
    let notification = |id: u32, text: &str, read: bool, minutes_ago: i64| Notification {
        id,
        text: text.to_string(),
        read,
        at: now - Duration::minutes(minutes_ago),
    };

    vec![
        notification(1, "A new issue was assigned to you", false, 0),
        notification(2, "Project settings were changed", false, 5),
        notification(3, "Issue #7 was closed", true, 60),
    ]
}

pub fn seed_activity() -> Vec<ActivityEntry> {
    let today = OffsetDateTime::now_utc().date();
    let entry = |id: u32, text: &str, days_ago: i64| ActivityEntry {
        id,
        text: text.to_string(),
        date: today - Duration::days(days_ago),
    };

    vec![
        entry(1, "Issue #7 \"Main page design review\" closed", 1),
        entry(2, "Issue #4 \"Responsive layout cleanup\" moved to review", 2),
        entry(3, "Issue #5 \"Wire up external API integration\" started", 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_reference_seeded_projects_and_users() {
        let users = seed_users();
        let projects = seed_projects();
        let issues = seed_issues(&users, &projects);

        for issue in &issues {
            assert!(projects.iter().any(|p| p.id == issue.project_id));
            assert!(users.iter().any(|u| u.id == issue.reporter.id));
            if let Some(assignee) = &issue.assignee {
                assert!(users.iter().any(|u| u.id == assignee.id));
            }
            let project = projects.iter().find(|p| p.id == issue.project_id).unwrap();
            assert_eq!(issue.project_name, project.name);
        }
    }

    #[test]
    fn issue_ids_are_unique_and_numeric() {
        let users = seed_users();
        let projects = seed_projects();
        let issues = seed_issues(&users, &projects);

        let mut ids: Vec<u32> = issues.iter().map(|i| i.id.parse().unwrap()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn due_dates_cover_overdue_today_and_upcoming() {
        let users = seed_users();
        let projects = seed_projects();
        let issues = seed_issues(&users, &projects);
        let today = OffsetDateTime::now_utc().date();

        let days: Vec<i64> = issues
            .iter()
            .filter_map(|i| i.due_date)
            .map(|due| crate::types::days_until(due, today))
            .collect();
        assert!(days.iter().any(|d| *d < 0), "need an overdue issue");
        assert!(days.iter().any(|d| *d == 0), "need a due-today issue");
        assert!(days.iter().any(|d| *d > 0), "need an upcoming issue");
    }
}

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use gira_core::{
    ActivityEntry, Board, Issue, IssueDraft, IssueFilter, IssueKind, IssueStatus, MockBackend,
    Notification, Priority, Project, ProjectFilter, ProjectStatus, User,
};
use time::OffsetDateTime;

use crate::config::GiraConfig;

mod board;
mod edit;
mod navigation;
mod state;

pub use edit::{CreateIssueState, IssueEditState, IssueForm};
pub use state::{CarriedCard, DashboardStats, IssueField, TextInput, View};

pub struct App {
    pub running: bool,
    pub backend: MockBackend,
    pub current_view: View,
    pub status_message: Option<String>,
    pub page_size: usize,

    // Identity and global project scope
    pub users: Vec<User>,
    pub current_user: User,
    pub selected_project: Option<Project>,

    // Issues page
    pub issues: Vec<Issue>,
    pub issue_search: TextInput,
    pub issue_search_active: bool,
    pub status_filter: Option<IssueStatus>,
    pub priority_filter: Option<Priority>,
    pub kind_filter: Option<IssueKind>,
    pub filtered_issues: Vec<Issue>,
    pub issue_index: usize,

    // Projects page
    pub projects: Vec<Project>,
    pub project_search: TextInput,
    pub project_search_active: bool,
    pub project_status_filter: Option<ProjectStatus>,
    pub filtered_projects: Vec<Project>,
    pub project_index: usize,
    pub project_page: usize,
    pub checked_projects: Vec<String>,

    // Board page
    pub board: Board,
    pub board_column: usize,
    pub board_row: usize,
    pub carried: Option<CarriedCard>,

    // Issue detail page; `detail` is None when the requested id is unknown
    pub detail_requested: String,
    pub detail: Option<IssueEditState>,

    // Create dialog
    pub create: Option<CreateIssueState>,

    // Project selector
    pub selector_search: TextInput,
    pub selector_list_focused: bool,
    pub selector_choices: Vec<Option<Project>>,
    pub selector_index: usize,
    pub selector_return: View,

    // Notification panel overlay
    pub notifications: Vec<Notification>,
    pub notifications_open: bool,

    // Dashboard
    pub activity: Vec<ActivityEntry>,
    pub dashboard: DashboardStats,
}

impl App {
    pub fn new(backend: MockBackend, config: &GiraConfig) -> Self {
        let users = backend.users();
        let current_user = users
            .iter()
            .find(|u| u.id == config.current_user)
            .cloned()
            .unwrap_or_else(|| User {
                id: config.current_user.clone(),
                name: format!("User {}", config.current_user),
                email: String::new(),
            });
        let selected_project = config
            .default_project
            .as_deref()
            .and_then(|id| backend.project(id));
        let board = Board::new(backend.status_columns(), backend.issues());

        Self {
            running: true,
            backend,
            current_view: View::Dashboard,
            status_message: None,
            page_size: config.page_size.max(1),
            users,
            current_user,
            selected_project,
            issues: Vec::new(),
            issue_search: TextInput::new(),
            issue_search_active: false,
            status_filter: None,
            priority_filter: None,
            kind_filter: None,
            filtered_issues: Vec::new(),
            issue_index: 0,
            projects: Vec::new(),
            project_search: TextInput::new(),
            project_search_active: false,
            project_status_filter: None,
            filtered_projects: Vec::new(),
            project_index: 0,
            project_page: 0,
            checked_projects: Vec::new(),
            board,
            board_column: 0,
            board_row: 0,
            carried: None,
            detail_requested: String::new(),
            detail: None,
            create: None,
            selector_search: TextInput::new(),
            selector_list_focused: false,
            selector_choices: Vec::new(),
            selector_index: 0,
            selector_return: View::Dashboard,
            notifications: Vec::new(),
            notifications_open: false,
            activity: Vec::new(),
            dashboard: DashboardStats::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The active project scope as an id, if any.
    pub fn current_scope(&self) -> Option<&str> {
        self.selected_project.as_ref().map(|p| p.id.as_str())
    }

    pub fn scope_label(&self) -> String {
        self.selected_project
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "All projects".to_string())
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Switch page. Each page discards its previous state and re-derives
    /// it from the backend, so leaving and re-entering a page resets any
    /// page-local mutation (board moves included).
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();

        match view {
            View::Dashboard => {
                self.activity = self.backend.activity_log();
                self.recompute_dashboard();
            }
            View::Issues => {
                self.issues = self.backend.issues();
                self.issue_search.clear();
                self.issue_search_active = false;
                self.status_filter = None;
                self.priority_filter = None;
                self.kind_filter = None;
                self.filter_issues();
            }
            View::Board => {
                self.board = Board::new(self.backend.status_columns(), self.backend.issues());
                self.board_column = 0;
                self.board_row = 0;
                self.carried = None;
            }
            View::Projects => {
                self.projects = self.backend.projects();
                self.project_search.clear();
                self.project_search_active = false;
                self.project_status_filter = None;
                self.project_page = 0;
                self.checked_projects.clear();
                self.filter_projects();
            }
            View::IssueDetail => {
                self.detail = self
                    .backend
                    .issue(&self.detail_requested)
                    .map(IssueEditState::new);
            }
            View::SelectProject => {
                self.selector_search.clear();
                self.selector_list_focused = false;
                self.rebuild_selector_choices();
            }
            View::CreateIssue => {
                let project_id = self
                    .current_scope()
                    .map(str::to_string)
                    .or_else(|| self.backend.projects().first().map(|p| p.id.clone()))
                    .unwrap_or_default();
                self.create = Some(CreateIssueState::new(project_id));
            }
        }
    }

    pub fn open_detail(&mut self, issue_id: impl Into<String>) {
        self.detail_requested = issue_id.into();
        self.navigate_to(View::IssueDetail);
    }

    pub fn open_selector(&mut self) {
        self.selector_return = self.current_view;
        self.navigate_to(View::SelectProject);
    }

    pub fn toggle_notifications(&mut self) {
        if self.notifications.is_empty() {
            self.notifications = self.backend.notifications();
        }
        self.notifications_open = !self.notifications_open;
    }

    pub fn recompute_dashboard(&mut self) {
        let issues = self.backend.issues();
        let today = OffsetDateTime::now_utc().date();
        self.dashboard = DashboardStats::compute(
            &issues,
            self.current_scope(),
            &self.current_user.id,
            today,
        );
    }

    /// Apply facet filters plus the substring search to the issues page.
    pub fn filter_issues(&mut self) {
        let filter = IssueFilter {
            search: (!self.issue_search.value.is_empty())
                .then(|| self.issue_search.value.clone()),
            status: self.status_filter,
            priority: self.priority_filter,
            kind: self.kind_filter,
            ..Default::default()
        };
        self.filtered_issues = self
            .issues
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect();
        self.issue_index = 0;
    }

    pub fn issue_search_char(&mut self, c: char) {
        self.issue_search.insert(c);
        self.filter_issues();
    }

    pub fn issue_search_backspace(&mut self) {
        self.issue_search.backspace();
        self.filter_issues();
    }

    pub fn issue_search_clear(&mut self) {
        self.issue_search.clear();
        self.filter_issues();
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = cycle_option(&IssueStatus::ALL, self.status_filter);
        self.filter_issues();
    }

    pub fn cycle_priority_filter(&mut self) {
        self.priority_filter = cycle_option(&Priority::ALL, self.priority_filter);
        self.filter_issues();
    }

    pub fn cycle_kind_filter(&mut self) {
        self.kind_filter = cycle_option(&IssueKind::ALL, self.kind_filter);
        self.filter_issues();
    }

    pub fn clear_issue_filters(&mut self) {
        self.status_filter = None;
        self.priority_filter = None;
        self.kind_filter = None;
        self.issue_search.clear();
        self.filter_issues();
    }

    pub fn focused_issue(&self) -> Option<&Issue> {
        self.filtered_issues.get(self.issue_index)
    }

    /// Apply the projects page search + status chips.
    pub fn filter_projects(&mut self) {
        let filter = ProjectFilter {
            search: (!self.project_search.value.is_empty())
                .then(|| self.project_search.value.clone()),
            status: self.project_status_filter,
            ..Default::default()
        };
        self.filtered_projects = self
            .projects
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        self.project_index = 0;
        self.project_page = 0;
    }

    pub fn project_search_char(&mut self, c: char) {
        self.project_search.insert(c);
        self.filter_projects();
    }

    pub fn project_search_backspace(&mut self) {
        self.project_search.backspace();
        self.filter_projects();
    }

    pub fn cycle_project_status_filter(&mut self) {
        self.project_status_filter =
            cycle_option(&ProjectStatus::ALL, self.project_status_filter);
        self.filter_projects();
    }

    pub fn total_project_pages(&self) -> usize {
        self.filtered_projects.len().div_ceil(self.page_size).max(1)
    }

    /// The slice of filtered projects visible on the current page.
    pub fn visible_projects(&self) -> &[Project] {
        let start = self.project_page * self.page_size;
        let end = (start + self.page_size).min(self.filtered_projects.len());
        if start >= self.filtered_projects.len() {
            &[]
        } else {
            &self.filtered_projects[start..end]
        }
    }

    pub fn focused_project(&self) -> Option<&Project> {
        self.filtered_projects.get(self.project_index)
    }

    /// Rebuild the selector list: the all-projects entry plus every
    /// project, fuzzy-filtered by the search input.
    pub fn rebuild_selector_choices(&mut self) {
        let projects = self.backend.projects();
        if self.selector_search.value.is_empty() {
            self.selector_choices = std::iter::once(None)
                .chain(projects.into_iter().map(Some))
                .collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(Option<Project>, i64)> = projects
                .into_iter()
                .filter_map(|project| {
                    matcher
                        .fuzzy_match(&project.name, &self.selector_search.value)
                        .map(|score| (Some(project), score))
                })
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.selector_choices = scored.into_iter().map(|(p, _)| p).collect();
        }

        // Keep the cursor on the current scope where possible.
        self.selector_index = self
            .selector_choices
            .iter()
            .position(|choice| {
                choice.as_ref().map(|p| p.id.as_str()) == self.current_scope()
            })
            .unwrap_or(0);
    }

    pub fn selector_search_char(&mut self, c: char) {
        self.selector_search.insert(c);
        self.rebuild_selector_choices();
        self.selector_index = 0;
    }

    pub fn selector_search_backspace(&mut self) {
        self.selector_search.backspace();
        self.rebuild_selector_choices();
        self.selector_index = 0;
    }

    pub fn selector_search_clear(&mut self) {
        self.selector_search.clear();
        self.rebuild_selector_choices();
    }

    /// Apply the highlighted selector choice as the global project scope
    /// and return to the page the selector was opened from.
    pub fn confirm_selector(&mut self) {
        if let Some(choice) = self.selector_choices.get(self.selector_index) {
            self.selected_project = choice.clone();
            let label = self.scope_label();
            let return_view = self.selector_return;
            self.navigate_to(return_view);
            self.set_status(format!("Project scope: {label}"));
        }
    }

    pub fn cancel_selector(&mut self) {
        let return_view = self.selector_return;
        self.navigate_to(return_view);
    }
}

/// None -> first -> ... -> last -> None.
fn cycle_option<T: Copy + PartialEq>(all: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let idx = all.iter().position(|v| *v == value).unwrap_or(0);
            if idx + 1 < all.len() {
                Some(all[idx + 1])
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(MockBackend::new(), &GiraConfig::default())
    }

    #[test]
    fn navigating_to_issues_resets_filters() {
        let mut app = app();
        app.navigate_to(View::Issues);
        app.cycle_status_filter();
        app.issue_search_char('x');
        assert!(app.status_filter.is_some());

        app.navigate_to(View::Dashboard);
        app.navigate_to(View::Issues);
        assert!(app.status_filter.is_none());
        assert!(app.issue_search.value.is_empty());
        assert_eq!(app.filtered_issues.len(), app.issues.len());
    }

    #[test]
    fn issue_search_narrows_the_list() {
        let mut app = app();
        app.navigate_to(View::Issues);
        let all = app.filtered_issues.len();
        for c in "login".chars() {
            app.issue_search_char(c);
        }
        assert!(!app.filtered_issues.is_empty());
        assert!(app.filtered_issues.len() < all);
        app.issue_search_clear();
        assert_eq!(app.filtered_issues.len(), all);
    }

    #[test]
    fn status_filter_cycles_back_to_none() {
        let mut app = app();
        app.navigate_to(View::Issues);
        assert!(app.status_filter.is_none());
        for _ in 0..IssueStatus::ALL.len() {
            app.cycle_status_filter();
            assert!(app.status_filter.is_some());
        }
        app.cycle_status_filter();
        assert!(app.status_filter.is_none());
    }

    #[test]
    fn unknown_detail_id_yields_not_found_state() {
        let mut app = app();
        app.open_detail("does-not-exist");
        assert_eq!(app.current_view, View::IssueDetail);
        assert!(app.detail.is_none());
        assert_eq!(app.detail_requested, "does-not-exist");
    }

    #[test]
    fn selector_sets_scope_and_returns() {
        let mut app = app();
        app.navigate_to(View::Board);
        app.open_selector();
        assert_eq!(app.current_view, View::SelectProject);

        // First entry is the all-projects choice; pick a concrete one.
        let concrete = app
            .selector_choices
            .iter()
            .position(|c| c.is_some())
            .unwrap();
        app.selector_index = concrete;
        app.confirm_selector();
        assert_eq!(app.current_view, View::Board);
        assert!(app.selected_project.is_some());
    }

    #[test]
    fn selector_fuzzy_filters_choices() {
        let mut app = app();
        app.open_selector();
        let all = app.selector_choices.len();
        for c in "plat".chars() {
            app.selector_search_char(c);
        }
        assert!(app.selector_choices.len() < all);
        assert!(app
            .selector_choices
            .iter()
            .all(|c| c.as_ref().map(|p| p.name.contains("Platform")).unwrap_or(false)));
    }

    #[test]
    fn project_pagination_slices_the_filtered_list() {
        let mut app = app();
        app.page_size = 2;
        app.navigate_to(View::Projects);
        assert_eq!(app.visible_projects().len(), 2);
        assert_eq!(
            app.total_project_pages(),
            app.filtered_projects.len().div_ceil(2)
        );
    }

    #[test]
    fn scope_changes_dashboard_numbers() {
        let mut app = app();
        app.navigate_to(View::Dashboard);
        let unscoped_total = app.dashboard.total;

        app.selected_project = app.backend.project("1");
        app.recompute_dashboard();
        assert!(app.dashboard.total < unscoped_total);
    }
}

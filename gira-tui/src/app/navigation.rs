use super::*;

impl App {
    /// Move focus down the issues list.
    pub fn issues_focus_down(&mut self) {
        if !self.filtered_issues.is_empty() && self.issue_index + 1 < self.filtered_issues.len() {
            self.issue_index += 1;
        }
    }

    pub fn issues_focus_up(&mut self) {
        self.issue_index = self.issue_index.saturating_sub(1);
    }

    /// Move focus down within the current projects page.
    pub fn projects_focus_down(&mut self) {
        let page_start = self.project_page * self.page_size;
        let page_end = (page_start + self.page_size).min(self.filtered_projects.len());
        if self.project_index + 1 < page_end {
            self.project_index += 1;
        }
    }

    pub fn projects_focus_up(&mut self) {
        let page_start = self.project_page * self.page_size;
        if self.project_index > page_start {
            self.project_index -= 1;
        }
    }

    pub fn projects_next_page(&mut self) {
        if self.project_page + 1 < self.total_project_pages() {
            self.project_page += 1;
            self.project_index = self.project_page * self.page_size;
        }
    }

    pub fn projects_prev_page(&mut self) {
        if self.project_page > 0 {
            self.project_page -= 1;
            self.project_index = self.project_page * self.page_size;
        }
    }

    /// Toggle the checkbox on the focused project row.
    pub fn projects_toggle_checked(&mut self) {
        let Some(project) = self.focused_project().map(|p| p.id.clone()) else {
            return;
        };
        if let Some(idx) = self.checked_projects.iter().position(|id| *id == project) {
            self.checked_projects.remove(idx);
        } else {
            self.checked_projects.push(project);
        }
    }

    /// Select every filtered project, or clear the selection if all are
    /// already selected.
    pub fn projects_toggle_select_all(&mut self) {
        let all_selected = !self.filtered_projects.is_empty()
            && self
                .filtered_projects
                .iter()
                .all(|p| self.checked_projects.contains(&p.id));
        if all_selected {
            self.checked_projects.clear();
        } else {
            self.checked_projects = self.filtered_projects.iter().map(|p| p.id.clone()).collect();
        }
    }

    /// Selector list movement wraps at both ends.
    pub fn selector_next(&mut self) {
        if !self.selector_choices.is_empty() {
            self.selector_index = (self.selector_index + 1) % self.selector_choices.len();
        }
    }

    pub fn selector_previous(&mut self) {
        if !self.selector_choices.is_empty() {
            self.selector_index = if self.selector_index == 0 {
                self.selector_choices.len() - 1
            } else {
                self.selector_index - 1
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GiraConfig;

    fn app() -> App {
        App::new(MockBackend::new(), &GiraConfig::default())
    }

    #[test]
    fn issue_focus_clamps_at_both_ends() {
        let mut app = app();
        app.navigate_to(View::Issues);
        app.issues_focus_up();
        assert_eq!(app.issue_index, 0);
        for _ in 0..100 {
            app.issues_focus_down();
        }
        assert_eq!(app.issue_index, app.filtered_issues.len() - 1);
    }

    #[test]
    fn project_paging_moves_focus_to_page_start() {
        let mut app = app();
        app.page_size = 2;
        app.navigate_to(View::Projects);

        app.projects_next_page();
        assert_eq!(app.project_page, 1);
        assert_eq!(app.project_index, 2);

        app.projects_prev_page();
        assert_eq!(app.project_page, 0);
        assert_eq!(app.project_index, 0);
    }

    #[test]
    fn checkbox_toggles_and_select_all_round_trips() {
        let mut app = app();
        app.navigate_to(View::Projects);

        app.projects_toggle_checked();
        assert_eq!(app.checked_projects.len(), 1);
        app.projects_toggle_checked();
        assert!(app.checked_projects.is_empty());

        app.projects_toggle_select_all();
        assert_eq!(app.checked_projects.len(), app.filtered_projects.len());
        app.projects_toggle_select_all();
        assert!(app.checked_projects.is_empty());
    }

    #[test]
    fn selector_wraps_around() {
        let mut app = app();
        app.open_selector();
        let len = app.selector_choices.len();
        app.selector_index = len - 1;
        app.selector_next();
        assert_eq!(app.selector_index, 0);
        app.selector_previous();
        assert_eq!(app.selector_index, len - 1);
    }
}

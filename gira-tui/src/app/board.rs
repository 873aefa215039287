use gira_core::{DropEvent, MoveOutcome, SkipReason};

use super::*;

impl App {
    /// Issues visible in the board column at `column_idx` under the
    /// current project scope.
    pub fn board_visible(&self, column_idx: usize) -> Vec<&Issue> {
        match self.board.columns().get(column_idx) {
            Some(column) => self.board.visible_issues(column, self.current_scope()),
            None => Vec::new(),
        }
    }

    pub fn board_focused_issue(&self) -> Option<&Issue> {
        self.board_visible(self.board_column)
            .get(self.board_row)
            .copied()
    }

    pub fn board_focus_left(&mut self) {
        if self.board_column > 0 {
            self.board_column -= 1;
            self.board_clamp_row();
        }
    }

    pub fn board_focus_right(&mut self) {
        if self.board_column + 1 < self.board.columns().len() {
            self.board_column += 1;
            self.board_clamp_row();
        }
    }

    pub fn board_focus_down(&mut self) {
        let len = self.board_visible(self.board_column).len();
        if len > 0 && self.board_row + 1 < len {
            self.board_row += 1;
        }
    }

    pub fn board_focus_up(&mut self) {
        self.board_row = self.board_row.saturating_sub(1);
    }

    fn board_clamp_row(&mut self) {
        let len = self.board_visible(self.board_column).len();
        self.board_row = if len == 0 {
            0
        } else {
            self.board_row.min(len - 1)
        };
    }

    /// Space on the board: pick up the focused card, or drop the carried
    /// one onto the focused column. The card stays in its source column
    /// until the drop lands, mirroring a pointer drag.
    pub fn board_pick_or_drop(&mut self) {
        match self.carried.take() {
            None => {
                let picked = self
                    .board_focused_issue()
                    .map(|issue| (issue.id.clone(), issue.title.clone()));
                if let Some((issue_id, title)) = picked {
                    let from = self.board.columns()[self.board_column].status.id.clone();
                    self.carried = Some(CarriedCard {
                        issue_id,
                        title,
                        from,
                    });
                    self.set_status(
                        "Carrying card: h/l to choose a column, Space to drop, Esc to cancel"
                            .to_string(),
                    );
                }
            }
            Some(card) => {
                let Some(target) = self.board.columns().get(self.board_column) else {
                    return;
                };
                let event = DropEvent {
                    issue_id: card.issue_id,
                    from: card.from,
                    to: target.status.id.clone(),
                };
                match self.board.apply_drop(&event) {
                    MoveOutcome::Moved {
                        issue_id,
                        to_status,
                    } => {
                        self.set_status(format!(
                            "Issue #{} moved to {}",
                            issue_id,
                            to_status.label()
                        ));
                        // Focus follows the dropped card (appended last).
                        let len = self.board_visible(self.board_column).len();
                        self.board_row = len.saturating_sub(1);
                    }
                    MoveOutcome::Skipped(SkipReason::SameColumn) => {
                        self.clear_status();
                    }
                    MoveOutcome::Skipped(_) => {
                        self.set_status("Card could not be moved".to_string());
                    }
                }
            }
        }
    }

    /// Esc while carrying: cancelled drag, nothing moves.
    pub fn board_cancel_carry(&mut self) {
        if self.carried.take().is_some() {
            self.clear_status();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GiraConfig;

    fn app() -> App {
        let mut app = App::new(MockBackend::new(), &GiraConfig::default());
        app.navigate_to(View::Board);
        app
    }

    /// Focus the first column that has a visible card.
    fn focus_first_card(app: &mut App) {
        for idx in 0..app.board.columns().len() {
            if !app.board_visible(idx).is_empty() {
                app.board_column = idx;
                app.board_row = 0;
                return;
            }
        }
        panic!("board has no visible cards");
    }

    #[test]
    fn pick_and_drop_moves_the_card_and_updates_status() {
        let mut app = app();
        focus_first_card(&mut app);
        let issue_id = app.board_focused_issue().unwrap().id.clone();
        let total = app.board.total_issues();

        app.board_pick_or_drop();
        assert!(app.carried.is_some());

        // Move to a different column and drop.
        let from_column = app.board_column;
        let target = (from_column + 1) % app.board.columns().len();
        app.board_column = target;
        app.board_pick_or_drop();

        assert!(app.carried.is_none());
        assert_eq!(app.board.total_issues(), total);
        let target_column = &app.board.columns()[target];
        let moved = target_column
            .issues
            .iter()
            .find(|i| i.id == issue_id)
            .expect("card landed in target column");
        assert_eq!(moved.status, target_column.status.status);
    }

    #[test]
    fn dropping_on_the_source_column_changes_nothing() {
        let mut app = app();
        focus_first_card(&mut app);
        let before = app.board.clone();

        app.board_pick_or_drop();
        app.board_pick_or_drop();

        assert_eq!(app.board, before);
        assert!(app.carried.is_none());
    }

    #[test]
    fn cancelling_a_carry_changes_nothing() {
        let mut app = app();
        focus_first_card(&mut app);
        let before = app.board.clone();

        app.board_pick_or_drop();
        app.board_column = (app.board_column + 1) % app.board.columns().len();
        app.board_cancel_carry();

        assert_eq!(app.board, before);
        assert!(app.carried.is_none());
    }

    #[test]
    fn board_moves_do_not_leak_into_the_backend() {
        let mut app = app();
        focus_first_card(&mut app);
        let issue_id = app.board_focused_issue().unwrap().id.clone();
        let stored_before = app.backend.issue(&issue_id).unwrap();

        app.board_pick_or_drop();
        app.board_column = (app.board_column + 1) % app.board.columns().len();
        app.board_pick_or_drop();

        // The mutation lives in the page's board copy only.
        assert_eq!(app.backend.issue(&issue_id).unwrap(), stored_before);

        // Re-entering the page rebuilds from fixtures.
        app.navigate_to(View::Dashboard);
        app.navigate_to(View::Board);
        let column_status = app
            .board
            .columns()
            .iter()
            .find(|c| c.issues.iter().any(|i| i.id == issue_id))
            .unwrap()
            .status
            .status;
        assert_eq!(column_status, stored_before.status);
    }

    #[test]
    fn scoped_board_hides_foreign_cards() {
        let mut app = app();
        app.selected_project = app.backend.project("1");
        app.navigate_to(View::Board);

        for idx in 0..app.board.columns().len() {
            assert!(app
                .board_visible(idx)
                .iter()
                .all(|i| i.project_id == "1"));
        }

        let visible: usize = (0..app.board.columns().len())
            .map(|i| app.board_visible(i).len())
            .sum();
        assert!(visible < app.board.total_issues());
    }

    #[test]
    fn focus_clamps_when_switching_to_a_shorter_column() {
        let mut app = app();
        // Find the column with the most cards and focus its last row.
        let (widest, len) = (0..app.board.columns().len())
            .map(|i| (i, app.board_visible(i).len()))
            .max_by_key(|(_, len)| *len)
            .unwrap();
        app.board_column = widest;
        app.board_row = len.saturating_sub(1);

        app.board_focus_right();
        if app.board_column != widest {
            let new_len = app.board_visible(app.board_column).len();
            assert!(app.board_row <= new_len.saturating_sub(1) || new_len == 0);
        }
    }
}

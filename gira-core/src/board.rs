use crate::issue::{Issue, IssueStatus};
use crate::status::StatusColumn;

/// The signal that a drag gesture ended over a target column, carrying
/// the dragged issue's identity and the source/target column identities.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub issue_id: String,
    pub from: String,
    pub to: String,
}

/// A column together with the ordered list of issues currently placed in
/// it. The list may hold issues from several projects; project scoping
/// only hides them (see [`Board::visible_issues`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: StatusColumn,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    SameColumn,
    UnknownSource,
    UnknownTarget,
    IssueNotInSource,
}

/// Result of applying a drop. Every `Skipped` case leaves the board
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Moved {
        issue_id: String,
        to_status: IssueStatus,
    },
    Skipped(SkipReason),
}

/// Per-column ordered issue lists plus the column-to-column move applied
/// when a card is dropped. Mutations live only in the owning view's state;
/// rebuilding the board from the backend resets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Distribute `issues` across `columns` by status. Column order follows
    /// `StatusColumn::order`; issues keep their seed order within a column.
    pub fn new(mut columns: Vec<StatusColumn>, issues: Vec<Issue>) -> Self {
        columns.sort_by_key(|c| c.order);
        let mut columns: Vec<Column> = columns
            .into_iter()
            .map(|status| Column {
                status,
                issues: Vec::new(),
            })
            .collect();

        for issue in issues {
            if let Some(column) = columns.iter_mut().find(|c| c.status.status == issue.status) {
                column.issues.push(issue);
            }
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.status.id == id)
    }

    pub fn total_issues(&self) -> usize {
        self.columns.iter().map(|c| c.issues.len()).sum()
    }

    /// The subset of a column's issues visible under a project scope.
    /// `None` shows everything; a scoped board hides (but keeps) issues
    /// belonging to other projects.
    pub fn visible_issues<'a>(
        &'a self,
        column: &'a Column,
        scope: Option<&str>,
    ) -> Vec<&'a Issue> {
        column
            .issues
            .iter()
            .filter(|issue| {
                scope
                    .map(|project_id| issue.project_id == project_id)
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Apply a drop: remove the issue from the source column, append it to
    /// the target column, and set its status to the target column's value.
    /// A cancelled drag (unknown target), unknown source, source == target,
    /// or an issue that is not in the source column all skip without
    /// mutating anything.
    pub fn apply_drop(&mut self, event: &DropEvent) -> MoveOutcome {
        if event.from == event.to {
            return MoveOutcome::Skipped(SkipReason::SameColumn);
        }
        let Some(to_idx) = self.columns.iter().position(|c| c.status.id == event.to) else {
            return MoveOutcome::Skipped(SkipReason::UnknownTarget);
        };
        let Some(from_idx) = self.columns.iter().position(|c| c.status.id == event.from) else {
            return MoveOutcome::Skipped(SkipReason::UnknownSource);
        };
        let Some(issue_idx) = self.columns[from_idx]
            .issues
            .iter()
            .position(|i| i.id == event.issue_id)
        else {
            return MoveOutcome::Skipped(SkipReason::IssueNotInSource);
        };

        let mut issue = self.columns[from_idx].issues.remove(issue_idx);
        let to_status = self.columns[to_idx].status.status;
        issue.status = to_status;
        self.columns[to_idx].issues.push(issue);

        tracing::debug!(
            issue_id = %event.issue_id,
            from = %event.from,
            to = %event.to,
            "issue moved on board"
        );

        MoveOutcome::Moved {
            issue_id: event.issue_id.clone(),
            to_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::status::default_columns;

    fn board() -> Board {
        let users = fixtures::seed_users();
        let projects = fixtures::seed_projects();
        Board::new(default_columns(), fixtures::seed_issues(&users, &projects))
    }

    fn drop_event(issue_id: &str, from: &str, to: &str) -> DropEvent {
        DropEvent {
            issue_id: issue_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Find the column currently holding an issue.
    fn column_of(board: &Board, issue_id: &str) -> String {
        board
            .columns()
            .iter()
            .find(|c| c.issues.iter().any(|i| i.id == issue_id))
            .map(|c| c.status.id.clone())
            .expect("issue on board")
    }

    #[test]
    fn seeding_distributes_issues_by_status() {
        let board = board();
        for column in board.columns() {
            for issue in &column.issues {
                assert_eq!(issue.status, column.status.status);
            }
        }
    }

    #[test]
    fn columns_are_sorted_by_order() {
        let board = board();
        let orders: Vec<u32> = board.columns().iter().map(|c| c.status.order).collect();
        assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn move_preserves_total_issue_count() {
        let mut board = board();
        let before = board.total_issues();
        let from = column_of(&board, "1");
        let to = if from == "2" { "3" } else { "2" };

        let outcome = board.apply_drop(&drop_event("1", &from, to));
        assert!(matches!(outcome, MoveOutcome::Moved { .. }));
        assert_eq!(board.total_issues(), before);
    }

    #[test]
    fn moved_issue_takes_target_column_status() {
        let mut board = board();
        let from = column_of(&board, "1");
        let to = if from == "4" { "1" } else { "4" };
        let expected = board.column(to).unwrap().status.status;

        board.apply_drop(&drop_event("1", &from, to));

        let target = board.column(to).unwrap();
        let moved = target.issues.iter().find(|i| i.id == "1").unwrap();
        assert_eq!(moved.status, expected);
        assert!(board
            .column(&from)
            .unwrap()
            .issues
            .iter()
            .all(|i| i.id != "1"));
    }

    #[test]
    fn moved_issue_is_appended_to_target() {
        let mut board = board();
        let from = column_of(&board, "1");
        let to = if from == "2" { "3" } else { "2" };

        board.apply_drop(&drop_event("1", &from, to));

        let target = board.column(to).unwrap();
        assert_eq!(target.issues.last().unwrap().id, "1");
    }

    #[test]
    fn same_column_drop_is_a_no_op() {
        let mut board = board();
        let from = column_of(&board, "1");
        let before = board.clone();

        let outcome = board.apply_drop(&drop_event("1", &from, &from));
        assert_eq!(outcome, MoveOutcome::Skipped(SkipReason::SameColumn));
        assert_eq!(board, before);
    }

    #[test]
    fn absent_target_is_a_no_op() {
        let mut board = board();
        let from = column_of(&board, "1");
        let before = board.clone();

        let outcome = board.apply_drop(&drop_event("1", &from, "99"));
        assert_eq!(outcome, MoveOutcome::Skipped(SkipReason::UnknownTarget));
        assert_eq!(board, before);
    }

    #[test]
    fn absent_source_is_a_no_op() {
        let mut board = board();
        let before = board.clone();

        let outcome = board.apply_drop(&drop_event("1", "99", "2"));
        assert_eq!(outcome, MoveOutcome::Skipped(SkipReason::UnknownSource));
        assert_eq!(board, before);
    }

    #[test]
    fn issue_missing_from_source_is_a_no_op() {
        let mut board = board();
        let from = column_of(&board, "1");
        let to = if from == "2" { "3" } else { "2" };
        let before = board.clone();

        // Issue "1" is not in `to`, so dropping it from `to` must not move it.
        let outcome = board.apply_drop(&drop_event("1", to, &from));
        assert_eq!(outcome, MoveOutcome::Skipped(SkipReason::IssueNotInSource));
        assert_eq!(board, before);
    }

    #[test]
    fn count_is_invariant_under_a_sequence_of_drops() {
        let mut board = board();
        let before = board.total_issues();
        let moves = [
            ("1", "1", "2"),
            ("1", "2", "4"),
            ("2", "1", "1"),
            ("3", "2", "3"),
            ("3", "3", "99"),
            ("1", "4", "1"),
        ];
        for (issue, from, to) in moves {
            board.apply_drop(&drop_event(issue, from, to));
        }
        assert_eq!(board.total_issues(), before);
    }

    #[test]
    fn project_scope_hides_but_keeps_foreign_issues() {
        let board = board();
        for column in board.columns() {
            let visible = board.visible_issues(column, Some("1"));
            assert!(visible.iter().all(|i| i.project_id == "1"));
            // Hidden issues are still in the underlying list.
            let hidden = column.issues.len() - visible.len();
            let foreign = column
                .issues
                .iter()
                .filter(|i| i.project_id != "1")
                .count();
            assert_eq!(hidden, foreign);
        }

        let unscoped: usize = board
            .columns()
            .iter()
            .map(|c| board.visible_issues(c, None).len())
            .sum();
        assert_eq!(unscoped, board.total_issues());
    }
}

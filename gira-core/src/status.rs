use serde::{Deserialize, Serialize};

use crate::issue::IssueStatus;

/// A board column. `order` determines left-to-right placement; `status`
/// is the value an issue acquires when dropped into the column. `color`
/// is a `#rrggbb` display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusColumn {
    pub id: String,
    pub name: String,
    pub color: String,
    pub order: u32,
    pub status: IssueStatus,
    pub project_id: Option<String>,
}

/// The statically seeded default column set. Columns are fixed: the board
/// controller moves issues between them but never creates or deletes them.
pub fn default_columns() -> Vec<StatusColumn> {
    let column = |id: &str, name: &str, color: &str, order: u32, status: IssueStatus| StatusColumn {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        order,
        status,
        project_id: None,
    };

    vec![
        column("1", "To Do", "#3b82f6", 1, IssueStatus::Open),
        column("2", "In Progress", "#f59e0b", 2, IssueStatus::InProgress),
        column("3", "In Review", "#8b5cf6", 3, IssueStatus::Resolved),
        column("4", "Done", "#10b981", 4, IssueStatus::Closed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_cover_every_status_in_order() {
        let columns = default_columns();
        assert_eq!(columns.len(), 4);
        let orders: Vec<u32> = columns.iter().map(|c| c.order).collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(orders, sorted, "orders must be unique and ascending");

        for status in IssueStatus::ALL {
            assert!(columns.iter().any(|c| c.status == status));
        }
    }
}

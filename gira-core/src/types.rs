use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// A user referenced by issues (reporter/assignee) and projects (owner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// An entry in the notification panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

/// A line in the dashboard's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub text: String,
    pub date: Date,
}

/// Days from `today` until `due`. Negative when overdue, zero on the day.
pub fn days_until(due: Date, today: Date) -> i64 {
    (due - today).whole_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn days_until_future_and_past() {
        let today = date!(2024 - 03 - 15);
        assert_eq!(days_until(date!(2024 - 03 - 18), today), 3);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(date!(2024 - 03 - 13), today), -2);
    }
}

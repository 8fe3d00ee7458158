// Task record held by the store

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Default format used when rendering `created_at`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One user-entered to-do item
///
/// Tasks are minted only by [`crate::TaskStore::add`]; fields are read-only
/// from the outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: u64,
    description: String,
    created_at: DateTime<Local>,
}

impl Task {
    pub(crate) fn new(id: u64, description: String, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Timestamp captured when the task was added
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Human-readable creation time using a chrono format string
    pub fn created_at_display(&self, format: &str) -> String {
        self.created_at.format(format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_task_accessors() {
        let task = Task::new(7, "buy milk".to_string(), fixed_time());

        assert_eq!(task.id(), 7);
        assert_eq!(task.description(), "buy milk");
        assert_eq!(task.created_at(), fixed_time());
    }

    #[test]
    fn test_created_at_display() {
        let task = Task::new(0, "x".to_string(), fixed_time());

        assert_eq!(task.created_at_display(DEFAULT_TIMESTAMP_FORMAT), "2024-03-09 14:05:07");
        assert_eq!(task.created_at_display("%H:%M"), "14:05");
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new(3, "write report".to_string(), fixed_time());

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"description\":\"write report\""));

        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Priority, TaskStatus};

/// A unit of work with a deadline, a type, and a set of assignees.
///
/// `status` and `is_completed` are derived state; see [`crate::status`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub status: TaskStatus,
    pub is_completed: bool,
    pub time_completed: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub task_type_id: String,
    /// Assigned worker IDs, sorted.
    pub assignees: Vec<String>,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Input for creating a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub task_type_id: String,
    pub assignees: Vec<String>,
}

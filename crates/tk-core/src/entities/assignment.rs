use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of the worker ↔ task join relation.
///
/// Owned by neither side: removing a worker or a task removes its rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assignment {
    pub worker_id: String,
    pub task_id: String,
    pub created_at: DateTime<Utc>,
}

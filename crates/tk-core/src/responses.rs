//! CLI response types returned as JSON by `tk` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Task, Worker};
use crate::enums::AssignmentState;

/// Response from `tk stats`: record counts for the home screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Dashboard {
    pub workers: u64,
    pub tasks: u64,
    pub positions: u64,
    pub task_types: u64,
}

/// Response from `tk worker tasks`: a worker's tasks split by completion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkerTasks {
    pub worker: Worker,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

/// Response from `tk task assign`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ToggleAssignmentResponse {
    pub task_id: String,
    pub worker_id: String,
    pub state: AssignmentState,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A category label attached to tasks. Names need not be unique.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskType {
    pub id: String,
    pub name: String,
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

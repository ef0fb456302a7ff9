use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user who can be assigned to tasks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Worker {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position_id: String,
    /// Opaque credential blob owned by the auth layer. Never serialized outward.
    #[serde(default, skip_serializing)]
    pub credentials: Option<String>,
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.username, self.first_name, self.last_name)
    }
}

/// Input for creating a worker. `position_id: None` selects the default position.
#[derive(Debug, Clone, Default)]
pub struct NewWorker {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position_id: Option<String>,
    pub credentials: Option<String>,
}

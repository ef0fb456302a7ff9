use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A worker's role or title. Names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Position {
    pub id: String,
    pub name: String,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! Priority, task status, assignment state, and entity type enums.
//!
//! Priorities and entity types use `snake_case` serialization. Task status is
//! serialized as its short storage code (`IP`, `IPAD`, `COT`, `CAD`) so the
//! persisted value stays stable if display labels change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Derived status of a task.
///
/// Not a free state machine: the status is always recomputed from the
/// deadline and completion timestamp (see [`crate::status::derive_status`]).
///
/// ```text
/// in_progress ──(deadline passes)──→ in_progress_after_deadline
///      │                                    │
///   finish                               finish
///      ↓                                    ↓
/// completed_on_time              completed_after_deadline
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    #[serde(rename = "IP")]
    InProgress,
    #[serde(rename = "IPAD")]
    InProgressAfterDeadline,
    #[serde(rename = "COT")]
    CompletedOnTime,
    #[serde(rename = "CAD")]
    CompletedAfterDeadline,
}

impl TaskStatus {
    /// Short code used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "IP",
            Self::InProgressAfterDeadline => "IPAD",
            Self::CompletedOnTime => "COT",
            Self::CompletedAfterDeadline => "CAD",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::InProgressAfterDeadline => "In progress after the deadline",
            Self::CompletedOnTime => "Completed on time",
            Self::CompletedAfterDeadline => "Completed after the deadline",
        }
    }

    /// Whether this status belongs to a completed task.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::CompletedOnTime | Self::CompletedAfterDeadline)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// AssignmentState
// ---------------------------------------------------------------------------

/// Outcome of toggling a worker on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentState {
    Assigned,
    Unassigned,
}

impl AssignmentState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Unassigned => "unassigned",
        }
    }
}

impl fmt::Display for AssignmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Type of stored entity, used in errors and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Position,
    TaskType,
    Worker,
    Task,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::TaskType => "task_type",
            Self::Worker => "worker",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Repository modules implementing the entity store operations.
//!
//! Each module adds methods to `TaskService` via `impl TaskService` blocks.

pub mod assignment;
pub mod position;
pub mod stats;
pub mod task;
pub mod task_type;
pub mod worker;

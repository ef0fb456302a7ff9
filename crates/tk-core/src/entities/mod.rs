//! Entity structs for all task-tracker domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `tk-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod assignment;
mod position;
mod task;
mod task_type;
mod worker;

pub use assignment::Assignment;
pub use position::Position;
pub use task::{NewTask, Task};
pub use task_type::TaskType;
pub use worker::{NewWorker, Worker};

mod position;
mod task;
mod task_type;
mod worker;

pub use position::PositionCommands;
pub use task::TaskCommands;
pub use task_type::TaskTypeCommands;
pub use worker::WorkerCommands;

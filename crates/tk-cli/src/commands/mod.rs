pub mod dispatch;
mod position;
mod shared;
mod stats;
mod task;
mod task_type;
mod worker;

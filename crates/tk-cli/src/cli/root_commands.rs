use clap::Subcommand;

use crate::cli::subcommands::{
    PositionCommands, TaskCommands, TaskTypeCommands, WorkerCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Job positions.
    Position {
        #[command(subcommand)]
        action: PositionCommands,
    },
    /// Task categories.
    TaskType {
        #[command(subcommand)]
        action: TaskTypeCommands,
    },
    /// Workers.
    Worker {
        #[command(subcommand)]
        action: WorkerCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Record counts.
    Stats,
}

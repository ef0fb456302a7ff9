use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Deadline as YYYY-MM-DD; must not be before today
        #[arg(long)]
        deadline: String,
        /// low, medium, or high (defaults to `[general] default_priority`)
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        task_type: String,
        /// Worker ID to assign; repeatable
        #[arg(long)]
        assignee: Vec<String>,
    },
    /// List tasks by deadline.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a task, refreshing its status for today.
    Get { id: String },
    /// Update a task.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        task_type: Option<String>,
    },
    /// Delete a task.
    Delete { id: String },
    /// Mark a task completed now.
    Finish { id: String },
    /// Toggle a worker's assignment to a task.
    Assign {
        id: String,
        #[arg(long)]
        worker: String,
    },
    /// List or replace a task's assignees.
    Assignees {
        id: String,
        /// Replace the assignee set with these worker IDs
        #[arg(long, num_args = 0..)]
        set: Option<Vec<String>>,
    },
}

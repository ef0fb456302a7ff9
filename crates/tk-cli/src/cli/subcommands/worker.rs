use clap::Subcommand;

/// Worker commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WorkerCommands {
    /// Create a worker.
    Create {
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Position ID (defaults to the unassigned position)
        #[arg(long)]
        position: Option<String>,
    },
    /// List workers by username.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a worker by ID.
    Get { id: String },
    /// Update a worker.
    Update {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        position: Option<String>,
    },
    /// Delete a worker.
    Delete { id: String },
    /// Show a worker's tasks split into in-progress and completed.
    Tasks { id: String },
}

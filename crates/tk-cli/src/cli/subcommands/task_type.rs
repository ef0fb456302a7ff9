use clap::Subcommand;

/// Task type commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskTypeCommands {
    /// Create a task type.
    Create { name: String },
    /// List task types by name.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a task type by ID.
    Get { id: String },
    /// Rename a task type.
    Rename {
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a task type and every task of that type.
    Delete { id: String },
}

use clap::Subcommand;

/// Position commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PositionCommands {
    /// Create a position.
    Create { name: String },
    /// List positions by name.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a position by ID.
    Get { id: String },
    /// Rename a position.
    Rename {
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a position no worker holds.
    Delete { id: String },
}

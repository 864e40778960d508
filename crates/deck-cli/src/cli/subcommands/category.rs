use clap::Subcommand;

/// Task type commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List task types with task counts.
    List {
        /// Only active task types.
        #[arg(long)]
        active: bool,
    },
    /// Create a task type.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Hex color, e.g. #C6FF00.
        #[arg(long)]
        color: Option<String>,
    },
    /// Update a task type.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Toggle between Active and Inactive.
    Toggle { id: String },
    /// Task types cannot be deleted; always fails.
    Delete { id: String },
}

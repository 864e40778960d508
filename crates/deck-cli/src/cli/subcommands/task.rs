use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks, filtered and sorted.
    List {
        /// Case-insensitive title substring.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Task type id.
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// due_at, priority, or created_at.
        #[arg(long)]
        sort: Option<String>,
        /// Group into Overdue / Today / Upcoming / Completed / Other.
        #[arg(long)]
        grouped: bool,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Task type id (required).
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<String>,
        /// Due time (HH:MM, local); defaults to the current time.
        #[arg(long, requires = "due")]
        at: Option<String>,
    },
    /// Update task fields.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        at: Option<String>,
        /// Remove the due date.
        #[arg(long, conflicts_with_all = ["due", "at"])]
        clear_due: bool,
    },
    /// Set a task's status.
    Status { id: String, status: String },
    /// Toggle between Done and To Do.
    Toggle { id: String },
    /// Copy a task as a new To Do task.
    Duplicate { id: String },
    /// Delete a task.
    Delete { id: String },
}

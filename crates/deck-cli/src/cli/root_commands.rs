use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, CategoryCommands, ProjectCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, and manage the profile.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Task types.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Greeting, summary counts, and section sizes.
    Dashboard,
    /// Tasks laid out by month, week, or day.
    Calendar(CalendarArgs),
    /// Dump JSON schema for a response type.
    Schema(SchemaArgs),
}

/// Arguments for `deck calendar`.
#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    /// Layout: month, week, day.
    #[arg(long, default_value = "month")]
    pub view: String,
    /// Anchor date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `deck schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: task, category, project, stats, dashboard.
    pub type_name: String,
}

use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Create an account.
    Signup(AuthSignupArgs),
    /// Revoke the session and clear stored credentials.
    Logout,
    /// Show the stored session.
    Status,
    /// Show the profile, or set the full name with --name.
    Profile(AuthProfileArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    /// Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
    /// Full name stored on the profile.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthProfileArgs {
    /// New full name (also used as the display name).
    #[arg(long)]
    pub name: Option<String>,
}

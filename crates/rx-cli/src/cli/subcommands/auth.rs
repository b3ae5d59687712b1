use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with a configured email and password.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Email address listed in `USER_EMAILS`.
    #[arg(long)]
    pub email: Option<String>,
    /// Password paired with the email in `USER_PASSWORDS`.
    #[arg(long)]
    pub password: Option<String>,
}

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    logged_in_at: String,
}

pub fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let email = args.email.as_deref().unwrap_or_default();
    let password = args.password.as_deref().unwrap_or_default();

    let session = rx_auth::login(&ctx.credentials, email, password)?;
    ctx.sessions
        .save(&session)
        .context("failed to store session")?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            email: session.email,
            logged_in_at: session.logged_in_at.to_rfc3339(),
        },
        flags.format,
    )
}

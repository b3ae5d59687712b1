use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    logged_in_at: Option<String>,
    session_path: String,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session_path = ctx.sessions.path().display().to_string();

    let status = if ctx.credentials.is_empty() {
        AuthStatusResponse {
            authenticated: false,
            email: None,
            logged_in_at: None,
            session_path,
            note: Some("USER_EMAILS / USER_PASSWORDS not configured".into()),
        }
    } else {
        match rx_auth::require_session(&ctx.sessions, &ctx.credentials) {
            Ok(session) => AuthStatusResponse {
                authenticated: true,
                email: Some(session.email),
                logged_in_at: Some(session.logged_in_at.to_rfc3339()),
                session_path,
                note: None,
            },
            Err(error) => AuthStatusResponse {
                authenticated: false,
                email: None,
                logged_in_at: None,
                session_path,
                note: Some(error.to_string()),
            },
        }
    };

    output(&status, flags.format)
}

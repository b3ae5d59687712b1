use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cleared = ctx.sessions.clear()?;
    if cleared {
        tracing::info!("session cleared");
    }
    output(&AuthLogoutResponse { cleared }, flags.format)
}

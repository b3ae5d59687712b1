use anyhow::Context;
use rx_config::ServerConfig;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::server::{self, App};

/// Handle `rxc serve`.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let server_config = args.bind.clone().map_or_else(
        || ctx.config.server.clone(),
        |bind| ServerConfig { bind },
    );
    let addr = server_config
        .socket_addr()
        .context("invalid bind address")?;

    if ctx.credentials.is_empty() {
        tracing::warn!("no credentials configured; every login will be refused");
    }

    let app = App::new(
        ctx.store,
        ctx.credentials.clone(),
        ctx.config.general.export_file_name.clone(),
    );
    tokio::task::spawn_blocking(move || server::run(addr, app))
        .await
        .context("HTTP server task panicked")?
}

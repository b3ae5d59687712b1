use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Drugs => commands::drugs::handle(flags),
        Commands::Check(args) => commands::check::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Graph(args) => commands::graph::handle(&args, ctx, flags),
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags),
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
    }
}

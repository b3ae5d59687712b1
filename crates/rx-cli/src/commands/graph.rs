use rx_core::graph::InteractionGraph;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GraphArgs;
use crate::commands::check::run_check;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rxc graph`.
pub fn handle(args: &GraphArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let report = run_check(ctx, &args.drugs);
    let graph = InteractionGraph::from_results(&report.results);

    if args.dot {
        print!("{}", graph.to_dot());
        return Ok(());
    }

    output(&graph, flags.format)
}

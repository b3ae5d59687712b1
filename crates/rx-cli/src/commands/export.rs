use anyhow::Context;
use rx_core::export::to_csv;
use rx_core::responses::ExportResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::check::run_check;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rxc export`.
///
/// Without `--output`/`--save` the CSV goes to stdout untouched by `--format`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let report = run_check(ctx, &args.drugs);
    let csv = to_csv(&report.results).context("failed to encode results as CSV")?;

    let Some(path) = target_path(args, &ctx.config.general.export_file_name) else {
        print!("{csv}");
        return Ok(());
    };

    std::fs::write(&path, &csv).with_context(|| format!("failed to write {path}"))?;
    tracing::info!(%path, rows = report.results.len(), "CSV export written");

    let response = ExportResponse {
        path,
        rows: u32::try_from(report.results.len()).unwrap_or(u32::MAX),
        bytes: csv.len() as u64,
    };
    output(&response, flags.format)
}

fn target_path(args: &ExportArgs, configured_name: &str) -> Option<String> {
    args.output
        .clone()
        .or_else(|| args.save.then(|| configured_name.to_string()))
}

use rx_core::InteractionReport;
use rx_core::export::CSV_HEADER;

use crate::cli::root_commands::CheckArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_rows};

/// Handle `rxc check`.
pub fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let report = run_check(ctx, &args.drugs);

    if flags.format == OutputFormat::Table {
        println!("{}", render_report(&report));
        return Ok(());
    }

    output(&report, flags.format)
}

/// Run the matcher for the login-gated commands and log what users should know.
pub(crate) fn run_check(ctx: &AppContext, drugs: &[String]) -> InteractionReport {
    let report = InteractionReport::check(ctx.store, drugs);
    if let Some(warning) = &report.warning {
        tracing::warn!("{warning}");
    }
    if !report.unknown.is_empty() {
        tracing::warn!(unknown = ?report.unknown, "names outside the known drug list");
    }
    report
}

fn render_report(report: &InteractionReport) -> String {
    let mut out = report.summary();
    if report.results.is_empty() {
        return out;
    }

    let rows = report
        .results
        .iter()
        .map(|result| {
            vec![
                result.drug_1.clone(),
                result.drug_2.clone(),
                result.severity.to_string(),
                result.risk.clone(),
                result.recommendation.clone(),
            ]
        })
        .collect::<Vec<_>>();

    out.push_str("\n\n");
    out.push_str(&render_rows(&CSV_HEADER, &rows));
    out.push_str(&format!(
        "\n\nhigh: {}  moderate: {}  low: {}",
        report.severity.high, report.severity.moderate, report.severity.low
    ));
    for result in &report.results {
        out.push_str(&format!("\n\n{}\n  {}", result.headline(), result.announcement()));
    }
    out
}

use rx_core::KNOWN_DRUGS;
use rx_core::responses::DrugListResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{output, render_rows};

/// Handle `rxc drugs`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = DrugListResponse::from_vocabulary(KNOWN_DRUGS);

    if flags.format == OutputFormat::Table {
        let rows = response
            .drugs
            .iter()
            .map(|drug| vec![drug.clone()])
            .collect::<Vec<_>>();
        println!("{}", render_rows(&["drug"], &rows));
        return Ok(());
    }

    output(&response, flags.format)
}

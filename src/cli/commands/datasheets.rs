//! Datasheets command: generate workbooks for selected catalog items

use super::shared::{prepare, setup_logging};
use crate::app::models::Record;
use crate::app::services::datasheet_generator::{DatasheetGenerator, GenerationReport};
use crate::app::services::grid::JsonWorkbookStore;
use crate::cli::args::DatasheetsArgs;
use anyhow::Result;
use colored::*;
use tracing::{info, warn};

/// Records matching the requested codes, in request order
///
/// A code matches a record's `Code` attribute first, then its node name,
/// ignoring case. Every matching record is selected; unknown codes are
/// returned separately.
pub fn select_records(records: &[Record], codes: &[String]) -> (Vec<Record>, Vec<String>) {
    let mut selected = Vec::new();
    let mut unknown = Vec::new();

    for code in codes.iter().map(|code| code.trim()).filter(|code| !code.is_empty()) {
        let by_code: Vec<&Record> = records
            .iter()
            .filter(|record| record.code().eq_ignore_ascii_case(code))
            .collect();
        let matches = if by_code.is_empty() {
            records
                .iter()
                .filter(|record| record.name.trim().eq_ignore_ascii_case(code))
                .collect()
        } else {
            by_code
        };

        if matches.is_empty() {
            unknown.push(code.to_string());
        }
        selected.extend(matches.into_iter().cloned());
    }

    (selected, unknown)
}

pub fn run_datasheets(args: DatasheetsArgs) -> Result<()> {
    setup_logging(&args.common);
    let (config, catalog) = prepare(&args.common)?;

    let records = catalog.collect_leaf_records(&config.catalog);
    let selection = if args.all {
        records
    } else {
        let (selected, unknown) = select_records(&records, &args.select);
        for code in &unknown {
            warn!("No catalog item matches '{}'", code);
        }
        selected
    };
    info!("Generating datasheets for {} item(s)", selection.len());

    let store = JsonWorkbookStore::new();
    let report = DatasheetGenerator::new(&config, &store)
        .with_progress(args.common.show_progress())
        .generate(&selection);

    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    if report.created > 0 {
        println!("{}", report.message.bright_green());
    } else {
        println!("{}", report.message.yellow());
    }
    for output in &report.outputs {
        println!("  {}", output.display().to_string().bright_cyan());
    }
    info!("Datasheet run finished in {:.2?}", report.duration);
}

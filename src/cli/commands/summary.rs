//! Summary command: one summary workbook per pipe class

use super::shared::{prepare, setup_logging};
use crate::app::services::datasheet_generator::ClassSummaryGenerator;
use crate::app::services::grid::JsonWorkbookStore;
use crate::app::services::pipe_class::{discover_classes, group_by_rating};
use crate::cli::args::SummaryArgs;
use anyhow::Result;
use colored::*;
use tracing::info;

pub fn run_summary(args: SummaryArgs) -> Result<()> {
    setup_logging(&args.common);
    let (config, catalog) = prepare(&args.common)?;

    let classes: Vec<String> = if args.all_classes {
        group_by_rating(&discover_classes(&catalog, &config.catalog)).ordered
    } else {
        args.classes.clone()
    };
    info!("Summarising {} pipe class(es)", classes.len());

    let store = JsonWorkbookStore::new();
    let report = ClassSummaryGenerator::new(&config, &store)
        .with_progress(args.common.show_progress())
        .generate(&catalog, &classes);

    if report.failed == 0 && report.ok > 0 {
        println!("{}", report.message.bright_green());
    } else {
        println!("{}", report.message.yellow());
    }
    for output in &report.outputs {
        println!("  {}", output.display().to_string().bright_cyan());
    }
    info!("Summary run finished in {:.2?}", report.duration);
    Ok(())
}

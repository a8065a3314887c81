//! Classes command: list discovered pipe classes by rating group

use super::shared::{prepare, setup_logging};
use crate::app::services::pipe_class::{ClassGroups, discover_classes, group_by_rating};
use crate::cli::args::{ClassesArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;

pub fn run_classes(args: ClassesArgs) -> Result<()> {
    setup_logging(&args.common);
    let (config, catalog) = prepare(&args.common)?;

    let groups = group_by_rating(&discover_classes(&catalog, &config.catalog));

    match args.output_format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&groups).context("Failed to serialize classes")?;
            println!("{}", json);
        }
        OutputFormat::Human => print_groups(&groups),
    }
    Ok(())
}

fn print_groups(groups: &ClassGroups) {
    if groups.ordered.is_empty() {
        println!("{}", "No pipe classes found in the catalog.".yellow());
        return;
    }

    for (title, codes) in [
        ("ASME", &groups.asme),
        ("DIN", &groups.din),
        ("Other", &groups.other),
    ] {
        if codes.is_empty() {
            continue;
        }
        println!("{} ({})", title.bright_green().bold(), codes.len());
        for code in codes {
            println!("  {}", code.bright_cyan());
        }
        println!();
    }
}

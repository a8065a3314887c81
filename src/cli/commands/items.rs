//! Items command: list catalog items with their classification

use super::shared::{prepare, setup_logging};
use crate::app::models::Record;
use crate::app::services::classifier::{Classification, classify};
use crate::cli::args::{ItemsArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

/// One listed catalog item
#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    pub folder: String,
    pub name: String,
    pub code: String,
    #[serde(flatten)]
    pub classification: Classification,
}

impl From<&Record> for ItemRow {
    fn from(record: &Record) -> Self {
        Self {
            folder: record.folder.clone(),
            name: record.name.clone(),
            code: record.code().to_string(),
            classification: classify(record),
        }
    }
}

/// Rows grouped by catalog folder, folders in first-seen order
pub fn group_by_folder(rows: Vec<ItemRow>) -> IndexMap<String, Vec<ItemRow>> {
    let mut groups: IndexMap<String, Vec<ItemRow>> = IndexMap::new();
    for row in rows {
        groups.entry(row.folder.clone()).or_default().push(row);
    }
    groups
}

pub fn run_items(args: ItemsArgs) -> Result<()> {
    setup_logging(&args.common);
    let (config, catalog) = prepare(&args.common)?;

    let records = catalog.collect_leaf_records(&config.catalog);
    info!("Listing {} catalog item(s)", records.len());
    let rows: Vec<ItemRow> = records.iter().map(ItemRow::from).collect();

    match args.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).context("Failed to serialize items")?;
            println!("{}", json);
        }
        OutputFormat::Human => print_items(group_by_folder(rows)),
    }
    Ok(())
}

fn print_items(groups: IndexMap<String, Vec<ItemRow>>) {
    if groups.is_empty() {
        println!("{}", "No catalog items found.".yellow());
        return;
    }

    for (folder, rows) in &groups {
        let title = if folder.is_empty() { "(root)" } else { folder };
        println!("{} ({})", title.bright_green().bold(), rows.len());
        for row in rows {
            let category = match row.classification.sub_category {
                Some(sub_category) => format!(
                    "{} / {}",
                    row.classification.category.label(),
                    sub_category.title()
                ),
                None => row.classification.category.label().to_string(),
            };
            println!(
                "  {:<20} {:<40} {}",
                row.code.bright_cyan(),
                row.name,
                category.bright_black()
            );
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Category, SubCategory};

    #[test]
    fn test_item_row_classification() {
        let record = Record::new("Elbow 90")
            .with_attribute("Code", "PP-2")
            .with_attribute("Type", "ELBOW 90 LR")
            .with_folder("Pipe & Fittings");

        let row = ItemRow::from(&record);
        assert_eq!(row.code, "PP-2");
        assert_eq!(row.classification.category, Category::PipingPart);
        assert_eq!(row.classification.sub_category, Some(SubCategory::Fittings));
    }

    #[test]
    fn test_group_by_folder_keeps_first_seen_order() {
        let rows = vec![
            ItemRow::from(&Record::new("Gate valve").with_folder("Valves")),
            ItemRow::from(&Record::new("Pipe").with_folder("Pipe & Fittings")),
            ItemRow::from(&Record::new("Ball valve").with_folder("Valves")),
        ];

        let groups = group_by_folder(rows);
        let folders: Vec<&String> = groups.keys().collect();
        assert_eq!(folders, vec!["Valves", "Pipe & Fittings"]);
        assert_eq!(groups["Valves"].len(), 2);
    }
}

//! Tests for pipe class recognition and discovery


use crate::app::models::{CatalogItem, Record};

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn record_with(name: &str, attributes: &[(&str, &str)]) -> Record {
    attributes
        .iter()
        .fold(Record::new(name), |record, (key, value)| {
            record.with_attribute(*key, *value)
        })
}

/// Catalog with classes spread over attributes and folder names
pub fn create_class_catalog_root() -> CatalogItem {
    CatalogItem::new("Catalogs").with_child(
        CatalogItem::new("JLE").with_child(
            CatalogItem::new("Materials")
                .with_child(
                    CatalogItem::new("Pipe & Fittings")
                        .with_child(
                            CatalogItem::new("Pipe SMLS")
                                .with_attribute("Code", "PP-1")
                                .with_attribute("JLE Pipe Class", "150jx00; 10JZ02"),
                        )
                        .with_child(
                            CatalogItem::new("Elbow")
                                .with_attribute("Code", "PP-2")
                                .with_attribute(
                                    "Piping classes that use this item (for piping class)",
                                    "600JY01 / 2JZ02\nNOT-A-CLASS",
                                ),
                        ),
                )
                .with_child(
                    CatalogItem::new("Valves").with_child(
                        CatalogItem::new("300JX01 valves").with_child(
                            CatalogItem::new("Gate valve")
                                .with_attribute("Code", "GV-1")
                                .with_attribute("JLE Possible Pipe Class", "150JX00"),
                        ),
                    ),
                ),
        ),
    )
}

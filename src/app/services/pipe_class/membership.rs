//! Pipe class membership and catalog-wide discovery

use super::codes::{is_class_code, natural_sort};
use crate::app::models::Record;
use crate::app::services::attribute_resolver::resolve_exact;
use crate::app::services::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::constants::{CLASS_MEMBERSHIP_KEYS, CLASS_TOKEN_SEPARATORS};
use indexmap::IndexSet;
use tracing::{debug, info};

fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(CLASS_TOKEN_SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Upper-cased tokens listed in the class-membership attributes of a record
pub fn class_tokens(record: &Record) -> Vec<String> {
    CLASS_MEMBERSHIP_KEYS
        .iter()
        .map(|key| resolve_exact(record, &[*key]))
        .flat_map(|value| {
            split_tokens(&value)
                .map(str::to_uppercase)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Whether a membership attribute of `record` lists `code` as a token
pub fn belongs_to_class(record: &Record, code: &str) -> bool {
    let wanted = code.trim().to_uppercase();
    !wanted.is_empty() && class_tokens(record).iter().any(|token| *token == wanted)
}

/// Distinct pipe class codes found in the catalog, in natural order
///
/// Tokens come from the membership attributes of every walked node and from
/// the node names themselves; only tokens shaped like class codes are kept.
pub fn discover_classes(catalog: &Catalog, config: &CatalogConfig) -> Vec<String> {
    let mut codes: IndexSet<String> = IndexSet::new();

    for node in catalog.walk_nodes(config) {
        let record = Record::from_item(node, "", &[]);
        for token in class_tokens(&record) {
            if is_class_code(&token) {
                codes.insert(token);
            }
        }
        for token in split_tokens(&node.name) {
            if is_class_code(token) {
                codes.insert(token.to_uppercase());
            }
        }
    }

    let mut codes: Vec<String> = codes.into_iter().collect();
    natural_sort(&mut codes);
    info!("Discovered {} pipe class(es)", codes.len());
    codes
}

/// Material-folder records that belong to `code`
pub fn class_records(catalog: &Catalog, config: &CatalogConfig, code: &str) -> Vec<Record> {
    let records: Vec<Record> = catalog
        .material_records(config)
        .into_iter()
        .filter(|record| belongs_to_class(record, code))
        .collect();
    debug!("Pipe class {} has {} item(s)", code, records.len());
    records
}

//! Category and sub-category classification
//!
//! Classification is a pure function of a record's current attributes. It is
//! recomputed on every generation run and never stored on the record.
//!
//! Checks run in a fixed order and the first match wins:
//!
//! 1. **Valve**: any attribute key or value mentions VALVE, the type text
//!    contains a valve word, or a valve-only attribute has a value
//! 2. **Gasket**: the category text contains GASKET
//! 3. **Bolt**: the category text contains BOLT or NUT
//! 4. **Piping part**, with a sub-category from keyword groups

use crate::app::models::{Category, Record, SubCategory};
use crate::app::services::attribute_resolver::{first_non_empty, resolve_exact};
use crate::constants::{VALVE_INDICATOR_KEYS, VALVE_WORDS, sub_category_keywords};
use serde::Serialize;
use tracing::trace;

#[cfg(test)]
pub mod tests;

/// Result of classifying one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    /// Present for piping parts only
    pub sub_category: Option<SubCategory>,
}

/// Classify a record into a category and, for piping parts, a sub-category
pub fn classify(record: &Record) -> Classification {
    let category = category_of(record);
    let sub_category = match category {
        Category::PipingPart => Some(sub_category_of(record)),
        _ => None,
    };
    trace!(
        "Classified '{}' as {:?} / {:?}",
        record.name, category, sub_category
    );
    Classification {
        category,
        sub_category,
    }
}

/// Category of a record; valve detection runs first
pub fn category_of(record: &Record) -> Category {
    if is_likely_valve(record) {
        return Category::Valve;
    }

    let blob = category_text(record);
    if blob.contains("GASKET") {
        Category::Gasket
    } else if blob.contains("BOLT") || blob.contains("NUT") {
        Category::Bolt
    } else {
        Category::PipingPart
    }
}

/// Whether any valve signal is present
pub fn is_likely_valve(record: &Record) -> bool {
    let mentions_valve = record.attributes.iter().any(|(key, value)| {
        key.to_uppercase().contains("VALVE") || value.to_uppercase().contains("VALVE")
    });
    if mentions_valve {
        return true;
    }

    let blob = first_non_empty([
        resolve_exact(record, &["Valve type"]),
        resolve_exact(record, &["Type"]),
        resolve_exact(record, &["Additional Comment"]),
        resolve_exact(record, &["Specification"]),
        resolve_exact(record, &["Comment"]),
        record.name.clone(),
    ])
    .to_uppercase();
    if VALVE_WORDS.iter().any(|word| blob.contains(word)) {
        return true;
    }

    VALVE_INDICATOR_KEYS
        .iter()
        .any(|key| !resolve_exact(record, &[*key]).is_empty())
}

/// Sub-category of a piping part from its type text
pub fn sub_category_of(record: &Record) -> SubCategory {
    let blob = first_non_empty([
        resolve_exact(record, &["Type"]),
        resolve_exact(record, &["Additional Comment"]),
        resolve_exact(record, &["Specification"]),
        resolve_exact(record, &["Body/Fitting type"]),
        resolve_exact(record, &["Comment"]),
        record.name.clone(),
    ])
    .to_uppercase();

    let groups: [(&[&str], SubCategory); 4] = [
        (sub_category_keywords::FLANGES, SubCategory::Flanges),
        (sub_category_keywords::BRANCH_FITTINGS, SubCategory::BranchFittings),
        (sub_category_keywords::FITTINGS, SubCategory::Fittings),
        (sub_category_keywords::PIPE, SubCategory::Pipe),
    ];

    groups
        .iter()
        .find(|(words, _)| words.iter().any(|word| blob.contains(word)))
        .map(|(_, sub_category)| *sub_category)
        .unwrap_or(SubCategory::Other)
}

/// Upper-cased text used for gasket and bolt detection
fn category_text(record: &Record) -> String {
    let type_hint = first_non_empty([
        resolve_exact(record, &["Type"]),
        resolve_exact(record, &["Valve type"]),
        resolve_exact(record, &["Additional Comment"]),
        resolve_exact(record, &["Specification"]),
        resolve_exact(record, &["Comment"]),
        record.name.clone(),
    ]);

    [
        type_hint,
        resolve_exact(record, &["Type"]),
        resolve_exact(record, &["Additional Comment"]),
        resolve_exact(record, &["Comment"]),
        record.name.clone(),
    ]
    .join(" ")
    .to_uppercase()
}

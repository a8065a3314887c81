//! Sheet and file naming for generated workbooks

use crate::app::models::Record;
use crate::app::services::attribute_resolver::{first_non_empty, resolve_exact};
use crate::constants::{DEFAULT_CLASS_FILE_NAME, DEFAULT_SHEET_NAME, INVALID_NAME_CHARS};

fn replace_invalid(name: &str) -> String {
    name.chars()
        .map(|c| {
            if INVALID_NAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Worksheet name: invalid characters become `_`, capped at `max_len`
/// characters, `ITEM` when blank
pub fn sanitize_sheet_name(name: &str, max_len: usize) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_SHEET_NAME.to_string();
    }
    replace_invalid(name).chars().take(max_len).collect()
}

/// File stem for a pipe class workbook, `PIPECLASS` when blank
pub fn sanitize_file_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_CLASS_FILE_NAME.to_string();
    }
    replace_invalid(name)
}

/// Text a datasheet's sheet name is derived from
pub fn sheet_name_seed(record: &Record) -> String {
    first_non_empty([
        resolve_exact(record, &["Code"]),
        resolve_exact(record, &["Device designation"]),
        resolve_exact(record, &["Comment"]),
        record.name.clone(),
    ])
}

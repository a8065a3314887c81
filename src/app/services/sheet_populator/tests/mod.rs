//! Tests for datasheet and summary population

pub mod datasheet_tests;
pub mod summary_tests;

use crate::app::models::Record;
use crate::app::services::grid::{CellRef, Worksheet};
use crate::config::LayoutConfig;

pub fn at(address: &str) -> CellRef {
    CellRef::parse(address).expect("valid test address")
}

/// Create a record from attribute pairs
pub fn record_with(name: &str, attributes: &[(&str, &str)]) -> Record {
    let mut record = Record::new(name);
    for (key, value) in attributes {
        record.attributes.insert(*key, *value);
    }
    record
}

/// Template sheet with a "Size" header in column D at `header_row`
pub fn template_with_size_header(name: &str, header_row: u32) -> Worksheet {
    let mut sheet = Worksheet::new(name);
    sheet.set_text(at("B2"), "DATA SHEET");
    sheet.set_text(CellRef::new(header_row, 4), "Size");
    sheet.set_text(CellRef::new(header_row, 6), "Qty ordered");
    sheet
}

pub fn layout() -> LayoutConfig {
    LayoutConfig::default()
}

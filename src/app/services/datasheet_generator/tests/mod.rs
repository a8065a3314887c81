//! Tests for datasheet and class summary generation


use crate::app::models::Record;
use crate::app::services::grid::{CellRef, JsonWorkbookStore, Workbook, WorkbookStore, Worksheet};
use crate::config::Config;
use std::path::Path;
use tempfile::TempDir;

pub fn at(address: &str) -> CellRef {
    CellRef::parse(address).expect("valid test address")
}

pub fn record_with(name: &str, attributes: &[(&str, &str)]) -> Record {
    let mut record = Record::new(name);
    for (key, value) in attributes {
        record.attributes.insert(*key, *value);
    }
    record
}

/// Template workbook with a cover sheet and one template sheet
pub fn template_workbook(template_sheet: &str) -> Workbook {
    let mut sheet = Worksheet::new(template_sheet);
    sheet.set_text(at("B2"), "DATA SHEET");
    sheet.set_text(at("D28"), "Size");
    Workbook::new()
        .with_sheet(Worksheet::new("Cover"))
        .with_sheet(sheet)
}

pub fn write_template(dir: &Path, base_name: &str, workbook: &Workbook) {
    let mut workbook = workbook.clone();
    JsonWorkbookStore::new()
        .save(&mut workbook, &dir.join(format!("{}.json", base_name)))
        .expect("write template");
}

/// Project with templates/ and output/ under a temporary root
pub fn create_test_project() -> (TempDir, Config) {
    let temp_dir = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(temp_dir.path().join("templates")).expect("templates dir");
    let config = Config::default().with_project_root(temp_dir.path());
    (temp_dir, config)
}

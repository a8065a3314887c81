//! Tests for the spreadsheet grid

pub mod cell_tests;
pub mod workbook_tests;
pub mod worksheet_tests;

use crate::app::services::grid::{CellRef, Workbook, Worksheet};

pub fn at(address: &str) -> CellRef {
    CellRef::parse(address).expect("valid test address")
}

/// Template-like sheet with a label, a merged banner and a formula
pub fn create_test_sheet(name: &str) -> Worksheet {
    let mut sheet = Worksheet::new(name);
    sheet.set_text(at("D4"), "TITLE");
    sheet.set_text(at("A1"), "Banner");
    sheet.merge(crate::app::services::grid::CellRange::new(at("A1"), at("C1")));
    sheet.set_text(at("D28"), "Size");
    sheet.set_formula(at("H30"), "SUM(H29:H29)");
    sheet
}

pub fn create_test_workbook() -> Workbook {
    Workbook::new()
        .with_sheet(create_test_sheet("Template-PP"))
        .with_sheet(Worksheet::new("Notes"))
}

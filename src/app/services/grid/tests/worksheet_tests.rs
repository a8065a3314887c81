//! Tests for worksheet reads and writes

use super::*;
use crate::app::services::grid::{CellRange, CellValue, HorizontalAlignment};

#[test]
fn test_set_and_read_text() {
    let mut sheet = Worksheet::new("S");
    sheet.set_text_at("G7", "PP-100").expect("valid address");
    assert_eq!(sheet.text(at("G7")), "PP-100");
    assert_eq!(sheet.text(at("G8")), "");
    assert!(sheet.set_text_at("??", "x").is_err());
}

#[test]
fn test_text_replaces_formula() {
    let mut sheet = create_test_sheet("S");
    assert!(sheet.has_formula(at("H30")));
    sheet.set_text(at("H30"), "manual");
    assert!(!sheet.has_formula(at("H30")));
    assert_eq!(sheet.text(at("H30")), "manual");
}

#[test]
fn test_clear_contents_keeps_style() {
    let mut sheet = Worksheet::new("S");
    sheet.set_text(at("B2"), "x");
    sheet.set_bold(at("B2"), true);
    sheet.clear_contents(at("B2"));
    assert!(sheet.is_blank(at("B2")));
    assert!(sheet.is_bold(at("B2")));

    sheet.clear(at("B2"));
    assert!(!sheet.is_bold(at("B2")));
}

#[test]
fn test_clear_contents_drops_unstyled_cell() {
    let mut sheet = Worksheet::new("S");
    sheet.set_number(at("F29"), 3.0);
    sheet.clear_contents(at("F29"));
    assert!(sheet.cell(at("F29")).is_none());
}

#[test]
fn test_find_text_exact_then_without_dots() {
    let mut sheet = Worksheet::new("S");
    sheet.set_text(at("B5"), " Acc. to std ");
    sheet.set_text(at("D28"), "SIZE");

    assert_eq!(sheet.find_text("size"), Some(at("D28")));
    assert_eq!(sheet.find_text("ACC TO STD"), Some(at("B5")));
    assert_eq!(sheet.find_text("missing"), None);
    assert_eq!(sheet.find_text("  "), None);
}

#[test]
fn test_find_text_skips_merged_cells() {
    let sheet = create_test_sheet("S");
    assert_eq!(sheet.find_text("Banner"), None);
    assert_eq!(sheet.find_text("Size"), Some(at("D28")));
}

#[test]
fn test_find_text_prefers_first_row_major_match() {
    let mut sheet = Worksheet::new("S");
    sheet.set_text(at("A40"), "Size");
    sheet.set_text(at("D28"), "Size");
    assert_eq!(sheet.find_text("Size"), Some(at("D28")));
}

#[test]
fn test_unmerge_row_only_touches_that_row() {
    let mut sheet = Worksheet::new("S");
    sheet.merge(CellRange::new(at("A10"), at("D10")));
    sheet.merge(CellRange::new(at("A11"), at("D11")));
    sheet.merge(CellRange::new(at("X10"), at("Z10")));

    sheet.unmerge_row(10, 20);
    assert!(!sheet.is_merged(at("B10")));
    assert!(sheet.is_merged(at("B11")));
    assert!(sheet.is_merged(at("Y10")));
}

#[test]
fn test_defined_names_case_insensitive() {
    let mut sheet = Worksheet::new("S");
    sheet.define_name("MaterialBolts", at("G11"));
    assert!(sheet.set_by_name("materialbolts", "A193 B7"));
    assert_eq!(sheet.text(at("G11")), "A193 B7");
    assert!(!sheet.set_by_name("Coating", "HDG"));
}

#[test]
fn test_alignment_and_values() {
    let mut sheet = Worksheet::new("S");
    sheet.set_alignment(at("J8"), HorizontalAlignment::Left);
    sheet.set_number(at("F29"), 0.0);
    assert_eq!(sheet.alignment(at("J8")), Some(HorizontalAlignment::Left));
    assert_eq!(sheet.value(at("F29")), CellValue::Number(0.0));
    assert_eq!(sheet.last_used_row(), 29);
}

//! Tests for workbook sheet management

use super::*;
use crate::constants::SHEET_NAME_MAX_LEN;

#[test]
fn test_sheet_lookup_is_case_insensitive() {
    let workbook = create_test_workbook();
    assert_eq!(workbook.sheet_index("template-pp"), Some(0));
    assert!(workbook.sheet("NOTES").is_some());
    assert!(workbook.sheet("Other").is_none());
}

#[test]
fn test_copy_sheet_appends_deep_copy() {
    let mut workbook = create_test_workbook();
    let index = workbook.copy_sheet(0, "PP-100", SHEET_NAME_MAX_LEN).expect("copy");
    assert_eq!(index, 2);

    let copy = workbook.sheet_at_mut(index).expect("copy exists");
    copy.set_text(at("D4"), "CHANGED");

    assert_eq!(workbook.sheet("PP-100").map(|s| s.text(at("D4"))), Some("CHANGED".into()));
    assert_eq!(workbook.sheet("Template-PP").map(|s| s.text(at("D4"))), Some("TITLE".into()));
}

#[test]
fn test_copy_sheet_dedupes_names() {
    let mut workbook = create_test_workbook();
    workbook.copy_sheet(0, "PP-100", SHEET_NAME_MAX_LEN).expect("copy");
    workbook.copy_sheet(0, "pp-100", SHEET_NAME_MAX_LEN).expect("copy");
    workbook.copy_sheet(0, "PP-100", SHEET_NAME_MAX_LEN).expect("copy");
    assert_eq!(
        workbook.sheet_names(),
        vec!["Template-PP", "Notes", "PP-100", "pp-100 (2)", "PP-100 (3)"]
    );
}

#[test]
fn test_unique_name_respects_length_cap() {
    let long = "X".repeat(40);
    let mut workbook = Workbook::new();
    workbook.add_sheet(Worksheet::new(long.clone()));
    assert_eq!(workbook.sheet_names()[0].chars().count(), 31);

    let name = workbook.unique_sheet_name(&long, SHEET_NAME_MAX_LEN);
    assert_eq!(name.chars().count(), 31);
    assert!(name.ends_with(" (2)"));

    workbook.copy_sheet(0, &long, SHEET_NAME_MAX_LEN).expect("copy");
    assert!(workbook.sheet_names().iter().all(|n| n.chars().count() <= 31));
}

#[test]
fn test_suffixed_copy_honours_smaller_cap() {
    let mut workbook = Workbook::new().with_sheet(Worksheet::new("Template"));
    workbook.copy_sheet(0, "GATE-VALVE-01", 10).expect("copy");
    workbook.copy_sheet(0, "GATE-VALVE-01", 10).expect("copy");
    workbook.copy_sheet(0, "GATE-VALVE-01", 10).expect("copy");

    assert_eq!(
        workbook.sheet_names(),
        vec!["Template", "GATE-VALVE", "GATE-V (2)", "GATE-V (3)"]
    );
}

#[test]
fn test_copy_missing_source_fails() {
    let mut workbook = create_test_workbook();
    assert!(workbook.copy_sheet(9, "X", SHEET_NAME_MAX_LEN).is_err());
}

#[test]
fn test_remove_sheet() {
    let mut workbook = create_test_workbook();
    assert!(workbook.remove_sheet("notes").is_some());
    assert!(workbook.remove_sheet("notes").is_none());
    assert_eq!(workbook.sheet_count(), 1);
}

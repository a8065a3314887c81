//! Tests for cell addressing and values

use super::*;
use crate::app::services::grid::{Cell, CellRange, CellValue};

#[test]
fn test_parse_simple_addresses() {
    assert_eq!(at("A1"), CellRef::new(1, 1));
    assert_eq!(at("G7"), CellRef::new(7, 7));
    assert_eq!(at("n24"), CellRef::new(24, 14));
    assert_eq!(at("$AA$12"), CellRef::new(12, 27));
}

#[test]
fn test_parse_rejects_malformed_addresses() {
    for bad in ["", "7", "G", "G0", "1G", "G-1", "G7X"] {
        assert!(CellRef::parse(bad).is_err(), "{} should not parse", bad);
    }
}

#[test]
fn test_display_round_trips() {
    for address in ["A1", "Z9", "AA10", "AZ100", "BA3", "XFD1048576"] {
        assert_eq!(at(address).to_string(), address);
    }
}

#[test]
fn test_range_parse_and_contains() {
    let range = CellRange::parse("C3:A1").expect("valid range");
    assert_eq!(range.to_string(), "A1:C3");
    assert!(range.contains(at("B2")));
    assert!(!range.contains(at("D2")));
    assert!(range.intersects_row(2, 3, 20));
    assert!(!range.intersects_row(4, 1, 20));
}

#[test]
fn test_number_text_drops_integral_fraction() {
    assert_eq!(CellValue::Number(0.0).as_text(), "0");
    assert_eq!(CellValue::Number(2.5).as_text(), "2.5");
    assert_eq!(CellValue::Text("x".into()).as_text(), "x");
    assert_eq!(CellValue::Empty.as_text(), "");
}

#[test]
fn test_blank_cell_with_style_only() {
    let mut cell = Cell::default();
    cell.style.bold = true;
    assert!(cell.is_blank());
    cell.formula = Some("A1*2".into());
    assert!(!cell.is_blank());
}

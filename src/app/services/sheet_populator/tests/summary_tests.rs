//! Tests for the pipe class summary writer

use super::*;
use crate::app::services::grid::{CellRange, HorizontalAlignment};
use crate::app::services::sheet_populator::summary::fit_lines;
use crate::app::services::sheet_populator::{SummaryBlock, SummaryWriter, populate_summary};

fn class_records() -> Vec<Record> {
    vec![
        record_with(
            "Pipe A",
            &[
                ("Code", "PP-002"),
                ("Sorting for piping class", "1"),
                ("Type", "PIPE SMLS"),
                ("Material", "P235GH"),
                ("Schedule", "40"),
                ("Size min", "1/2"),
                ("Size max", "24"),
            ],
        ),
        record_with(
            "Flange",
            &[
                ("Code", "FL-1"),
                ("Sorting for piping class", "4"),
                ("Type", "WELD NECK FLANGE"),
            ],
        ),
        record_with(
            "Stud",
            &[
                ("Code", "BN-1"),
                ("Type", "STUD BOLT"),
                ("Acc to standard", "ASME B18.2.1"),
                ("Material - Bolts", "A193 B7"),
                ("Material - Nuts", "A194 2H"),
                ("Coating", "HDG"),
            ],
        ),
        record_with(
            "Pipe B",
            &[
                ("Code", "PP-001"),
                ("Sorting for piping class", "1"),
                ("Type", "PIPE WELDED"),
            ],
        ),
    ]
}

#[test]
fn test_fit_lines_pads_and_folds() {
    let lines: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    assert_eq!(fit_lines(&lines, 4), vec!["a", "b", "", ""]);

    let lines: Vec<String> = ["a", "b", "c", "d", "", "f"].iter().map(|s| s.to_string()).collect();
    assert_eq!(fit_lines(&lines, 4), vec!["a", "b", "c", "d; f"]);

    assert!(fit_lines(&lines, 0).is_empty());
}

#[test]
fn test_summary_row_layout() {
    let mut sheet = Worksheet::new("PIPING PARTS");
    let next = populate_summary(&mut sheet, 8, &class_records(), &layout()).expect("summary");

    // Group 1 header with a blank row on either side
    assert!(sheet.is_blank(at("A8")));
    assert_eq!(sheet.text(at("A9")), "PIPE");
    assert!(sheet.is_bold(at("A9")));
    assert!(sheet.is_blank(at("A10")));

    // Piping parts ordered by code within the group
    assert_eq!(sheet.text(at("N11")), "PP-001");
    assert_eq!(sheet.text(at("A11")), "PIPE WELDED");
    assert_eq!(sheet.text(at("N15")), "PP-002");
    assert_eq!(sheet.text(at("A15")), "PIPE SMLS");
    assert_eq!(sheet.text(at("E15")), "P235GH");
    assert_eq!(sheet.text(at("J15")), "1/2");
    assert_eq!(sheet.text(at("K15")), "24");
    assert_eq!(sheet.text(at("L15")), "SCH40");

    assert_eq!(sheet.text(at("A20")), "FLANGES");
    assert_eq!(sheet.text(at("N22")), "FL-1");
    assert_eq!(sheet.text(at("A22")), "WELD NECK FLANGE");

    assert_eq!(sheet.text(at("A26")), "BOLTING");
    assert!(sheet.is_bold(at("A26")));
    assert_eq!(sheet.text(at("A27")), "STUD BOLT");
    assert_eq!(sheet.text(at("E27")), "ASME B18.2.1");
    assert_eq!(sheet.text(at("E28")), "A193 B7 - HDG");
    assert_eq!(sheet.text(at("E29")), "A194 2H - HDG");
    assert_eq!(sheet.text(at("J27")), "MATCHING FLANGE");
    assert_eq!(sheet.alignment(at("J27")), Some(HorizontalAlignment::Left));
    assert_eq!(sheet.text(at("N27")), "BN-1");

    assert_eq!(next, 31);
    assert_eq!(sheet.print_area, Some(CellRange::parse("A1:N31").expect("range")));
}

#[test]
fn test_summary_clears_stale_block_lines() {
    let mut sheet = Worksheet::new("PIPING PARTS");
    sheet.set_text(at("A12"), "old seam");
    sheet.set_text(at("E13"), "old connection");
    sheet.set_bold(at("E13"), true);

    populate_summary(&mut sheet, 8, &class_records(), &layout()).expect("summary");

    assert!(sheet.is_blank(at("A12")));
    assert!(sheet.is_blank(at("E13")));
    assert!(sheet.is_bold(at("E13")));
}

#[test]
fn test_header_unmerges_row() {
    let mut sheet = Worksheet::new("S");
    sheet.merge(CellRange::parse("A9:T9").expect("range"));
    sheet.merge(CellRange::parse("A40:C40").expect("range"));

    let layout = layout();
    let mut writer = SummaryWriter::new(&mut sheet, 9, &layout);
    writer.write_header("Pipe");
    assert_eq!(writer.row(), 10);

    assert!(!sheet.is_merged(at("A9")));
    assert!(sheet.is_merged(at("B40")));
    assert_eq!(sheet.text(at("A9")), "PIPE");
}

#[test]
fn test_empty_section_writes_nothing() {
    let mut sheet = Worksheet::new("S");
    let layout = layout();
    let mut writer = SummaryWriter::new(&mut sheet, 8, &layout);
    writer.write_section("VALVE", &[]);
    assert_eq!(writer.row(), 8);
    assert_eq!(writer.finish().expect("finish"), 8);
    assert!(sheet.cells.is_empty());
}

#[test]
fn test_block_overflow_folds_into_last_row() {
    let mut sheet = Worksheet::new("S");
    let layout = layout();
    let block = SummaryBlock {
        type_lines: vec!["GATE VALVE".to_string()],
        description_lines: ["BODY : A105", "WEDGE : F6", "STEM : F6", "SEAT : STL", "NACE"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        item_code: "V-9".to_string(),
        ..SummaryBlock::default()
    };

    let mut writer = SummaryWriter::new(&mut sheet, 8, &layout);
    writer.write_block(&block);
    assert_eq!(writer.row(), 12);

    assert_eq!(sheet.text(at("E8")), "BODY : A105");
    assert_eq!(sheet.text(at("E11")), "SEAT : STL; NACE");
    assert!(sheet.is_blank(at("E12")));
    assert_eq!(sheet.text(at("N8")), "V-9");
}

#[test]
fn test_gasket_and_valve_sections() {
    let records = vec![
        record_with(
            "Valve",
            &[
                ("Code", "V-1"),
                ("Type", "BALL VALVE, FULL BORE, FIRE SAFE"),
                ("Description 1 (C1)", "BODY"),
                ("Description 1 (C3)", "A105"),
            ],
        ),
        record_with(
            "Gasket",
            &[("Code", "G-1"), ("Type", "SPIRAL WOUND GASKET"), ("Class", "300")],
        ),
    ];
    let mut sheet = Worksheet::new("PIPING PARTS");
    let next = populate_summary(&mut sheet, 8, &records, &layout()).expect("summary");

    assert_eq!(sheet.text(at("A8")), "GASKET");
    assert_eq!(sheet.text(at("A9")), "SPIRAL WOUND GASKET");
    assert_eq!(sheet.text(at("L9")), "300");
    assert_eq!(sheet.text(at("N9")), "G-1");

    assert_eq!(sheet.text(at("A13")), "VALVE");
    assert_eq!(sheet.text(at("A14")), "BALL VALVE");
    assert_eq!(sheet.text(at("A15")), "FULL BORE, FIRE SAFE");
    assert_eq!(sheet.text(at("E14")), "BODY : A105");
    assert_eq!(sheet.text(at("N14")), "V-1");
    assert_eq!(next, 18);
}

//! Tests for the per-category datasheet layouts

use super::*;
use crate::app::models::Category;
use crate::app::services::grid::{CellValue, Workbook};
use crate::app::services::sheet_populator::bolt::populate_bolt;
use crate::app::services::sheet_populator::gasket::populate_gasket;
use crate::app::services::sheet_populator::piping_part::populate_piping_part;
use crate::app::services::sheet_populator::populate;
use crate::app::services::sheet_populator::valve::populate_valve;

fn piping_part_record() -> Record {
    record_with(
        "Item 7",
        &[
            ("Comment", "PP-100"),
            ("Device designation", "DD-1"),
            ("Additional Comment", "PIPE, SMLS"),
            ("Body/Fitting type", "Seamless pipe"),
            ("Material number", "1.0345"),
            ("Acc to Standard", "EN 10216-2"),
            ("Schedule", "40"),
            ("Rating", "150#"),
            ("Piping Connection 1", "BE"),
            ("JLE Pipe Class", "150JX00"),
            ("Size (Min)", "1/2"),
            ("Size (Max)", "2"),
        ],
    )
}

#[test]
fn test_piping_part_fixed_cells() {
    let mut sheet = template_with_size_header("PP-100", 28);
    populate_piping_part(&mut sheet, &piping_part_record(), &layout()).expect("populate");

    assert_eq!(sheet.text(at("G7")), "PP-100");
    assert_eq!(sheet.text(at("G9")), "PIPE, SMLS");
    assert_eq!(sheet.text(at("G10")), "SEAMLESS");
    assert_eq!(sheet.text(at("D10")), "SEAMLESS/WELDED");
    assert_eq!(sheet.text(at("G12")), "1.0345");
    assert_eq!(sheet.text(at("G13")), "EN 10216-2");
    assert_eq!(sheet.text(at("G14")), "40");
    assert_eq!(sheet.text(at("D14")), "SCHEDULE");
    assert_eq!(sheet.text(at("G15")), "150#");
    assert_eq!(sheet.text(at("D15")), "RATING");
    assert_eq!(sheet.text(at("D18")), "PIPING CONNECTIONS");
    assert_eq!(sheet.text(at("G18")), "BE");
    assert_eq!(sheet.text(at("G24")), "150JX00");
    assert_eq!(sheet.text(at("D4")), "FITTING SPECIFICATION");
    assert_eq!(sheet.text(at("D5")), "PIPE");
    assert!(sheet.is_bold(at("D5")));
    assert_eq!(sheet.text(at("D57")), "1.0");
}

#[test]
fn test_piping_part_end_to_end_size_rows() {
    let mut sheet = template_with_size_header("PP-100", 28);
    populate_piping_part(&mut sheet, &piping_part_record(), &layout()).expect("populate");

    let rows: Vec<u32> = (29..=40)
        .filter(|row| !sheet.is_blank(CellRef::new(*row, 4)))
        .collect();
    assert_eq!(rows, vec![29, 30, 31, 32, 33, 34]);
    for row in rows {
        assert_eq!(sheet.value(CellRef::new(row, 6)), CellValue::Number(0.0));
        assert!(sheet.has_formula(CellRef::new(row, 8)));
    }
}

#[test]
fn test_piping_part_labels_only_with_values() {
    let mut sheet = Worksheet::new("X");
    populate_piping_part(&mut sheet, &record_with("PLAIN-1", &[]), &layout()).expect("populate");

    assert_eq!(sheet.text(at("G7")), "PLAIN-1");
    for label in ["D10", "D14", "D15", "D16", "D18", "D20", "D21", "D23"] {
        assert!(sheet.is_blank(at(label)), "{} should stay blank", label);
    }
    assert_eq!(sheet.text(at("D5")), "PIPING PARTS");
}

#[test]
fn test_piping_part_class_label_and_body_fallbacks() {
    let record = record_with(
        "X",
        &[
            ("Class", "PN40"),
            ("Body/Fitting type", "Spiral, 6M LENGTH"),
            ("Color Mark 2", "BLUE"),
        ],
    );
    let mut sheet = Worksheet::new("X");
    populate_piping_part(&mut sheet, &record, &layout()).expect("populate");

    assert_eq!(sheet.text(at("G15")), "PN40");
    assert_eq!(sheet.text(at("D15")), "CLASS");
    assert_eq!(sheet.text(at("G10")), "Spiral, 6M LENGTH");
    assert_eq!(sheet.text(at("G16")), "Spiral, 6M LENGTH");
    assert_eq!(sheet.text(at("D21")), "COLOUR MARKING");
    assert_eq!(sheet.text(at("F22")), "2ND");
    assert_eq!(sheet.text(at("G22")), "BLUE");
    assert!(sheet.is_blank(at("G21")));
}

#[test]
fn test_population_is_idempotent_on_fresh_copies() {
    let template = Workbook::new().with_sheet(template_with_size_header("Template-PP", 28));
    let record = piping_part_record();

    let mut first = template.clone();
    let mut second = template.clone();
    populate_piping_part(&mut first.sheets[0], &record, &layout()).expect("populate");
    populate_piping_part(&mut second.sheets[0], &record, &layout()).expect("populate");
    assert_eq!(first, second);

    let mut again = first.clone();
    populate_piping_part(&mut again.sheets[0], &record, &layout()).expect("populate");
    assert_eq!(again, first);
}

#[test]
fn test_gasket_layout() {
    let record = record_with(
        "GK-1",
        &[
            ("Device designation", "GK-001"),
            ("Type", "SPIRAL WOUND"),
            ("Gasket Inside/Outside Ring", "inner and outer ring"),
            ("Description 1 (C1)", "WINDING"),
            ("Material 1 column 2", "316L"),
            ("Material Standard", "ASME B16.20"),
            ("Class", "300"),
            ("Flange Facing", "RF"),
            ("Thickness", "4.5 mm"),
            ("JLE Design pressure min", "-1 barg"),
            ("JLE Design pressure max", "40 BAR(G)"),
            ("Design temperature", "200 DEGC"),
            ("Size (Min)", "DN50"),
            ("Size (Max)", "3"),
        ],
    );
    let mut sheet = template_with_size_header("GK-001", 28);
    populate_gasket(&mut sheet, &record, &layout()).expect("populate");

    assert_eq!(sheet.text(at("G7")), "GK-001");
    assert_eq!(sheet.text(at("G9")), "SPIRAL WOUND\nWITH INNER AND OUTER RING");
    assert_eq!(sheet.text(at("G12")), "WINDING");
    assert_eq!(sheet.text(at("I12")), "316L");
    assert!(sheet.is_blank(at("G13")));
    assert_eq!(sheet.text(at("G16")), "ASME B16.20");
    assert_eq!(sheet.text(at("G17")), "300");
    assert_eq!(sheet.text(at("G18")), "RF");
    assert_eq!(sheet.text(at("G19")), "4.5 mm");
    assert_eq!(sheet.text(at("G21")), "-1 / +40 BARG");
    assert_eq!(sheet.text(at("D21")), "DESIGN PRESSURE");
    assert_eq!(sheet.text(at("G22")), "200 °C");
    assert_eq!(sheet.text(at("D22")), "DESIGN TEMPERATURE");
    assert_eq!(sheet.text(at("D4")), "GASKET DATA SHEET");

    assert_eq!(sheet.text(at("D29")), "DN50");
    assert_eq!(sheet.text(at("D30")), "DN65");
    assert_eq!(sheet.text(at("D31")), "DN80");
    assert!(sheet.is_blank(at("D32")));
}

#[test]
fn test_gasket_without_design_data_has_no_labels() {
    let mut sheet = Worksheet::new("G");
    populate_gasket(&mut sheet, &record_with("GK-2", &[("Type", "FLAT")]), &layout())
        .expect("populate");
    assert!(sheet.is_blank(at("D21")));
    assert!(sheet.is_blank(at("D22")));
    assert_eq!(sheet.text(at("G7")), "GK-2");
}

#[test]
fn test_valve_layout() {
    let record = record_with(
        "V-1",
        &[
            ("Code", "BV-100"),
            ("Device designation", "XV-1"),
            ("Valve Type", "BALL VALVE, FULL BORE"),
            ("Fluid Name (process)", "Natural gas"),
            ("Corrosive Component", "H2S"),
            ("JLE Design pressure min", "0"),
            ("JLE Design pressure max", "16"),
            ("JLE Design temperature max", "120"),
            ("DP2", "10"),
            ("Design code", "API 6D"),
            ("Rating", "150"),
            ("Class", "B"),
            ("Description 1 (C1)", "BODY"),
            ("Material Group", "CS"),
            ("Description 2 (C1)", "BALL"),
            ("Material number", "1.4404"),
            ("End connection", "RF FLANGED"),
            ("Operator", "LEVER"),
            ("Remark 1", "FIRE SAFE"),
            ("JLE Possible Pipe Class", "150JX00"),
            ("DN min", "DN50"),
            ("DN max", "DN100"),
        ],
    );
    let mut sheet = template_with_size_header("BV-100", 32);
    populate_valve(&mut sheet, &record, &layout()).expect("populate");

    assert_eq!(sheet.text(at("F7")), "BV-100");
    assert_eq!(sheet.text(at("F9")), "BALL VALVE, FULL BORE");
    assert_eq!(sheet.text(at("F11")), "Natural gas");
    assert_eq!(sheet.text(at("F12")), "H2S");
    assert_eq!(sheet.text(at("F14")), "0 / 16");
    assert_eq!(sheet.text(at("F15")), "120");
    assert_eq!(sheet.text(at("G14")), "10");
    assert_eq!(sheet.text(at("F17")), "API 6D");
    assert_eq!(sheet.text(at("D17")), "RATING");
    assert_eq!(sheet.text(at("F19")), "BODY");
    assert_eq!(sheet.text(at("H19")), "CS");
    assert_eq!(sheet.text(at("F20")), "BALL");
    assert_eq!(sheet.text(at("I20")), "1.4404");
    assert_eq!(sheet.text(at("D24")), "PIPING CONNECTION");
    assert_eq!(sheet.text(at("F24")), "RF FLANGED");
    assert_eq!(sheet.text(at("F25")), "LEVER");
    assert_eq!(sheet.text(at("F26")), "FIRE SAFE");
    assert_eq!(sheet.text(at("F29")), "150JX00");
    assert_eq!(sheet.text(at("D4")), "VALVE DATA SHEET");

    let labels: Vec<String> = (33..38).map(|row| sheet.text(CellRef::new(row, 4))).collect();
    assert_eq!(labels, vec!["2", "2 1/2", "3", "3 1/2", "4"]);
    assert_eq!(sheet.value(at("G33")), CellValue::Number(0.0));
    assert_eq!(sheet.formula(at("H33")), Some("IFERROR(F33*G33,0)"));
}

#[test]
fn test_valve_class_label_without_rating() {
    let mut sheet = Worksheet::new("V");
    populate_valve(&mut sheet, &record_with("V-2", &[("Class", "PN16")]), &layout())
        .expect("populate");
    assert_eq!(sheet.text(at("D17")), "CLASS");
    assert!(sheet.is_blank(at("D24")));
}

#[test]
fn test_bolt_layout_and_defined_names() {
    let record = record_with(
        "B-1",
        &[
            ("Code", "BN-1"),
            ("Type", "STUD BOLT"),
            ("Material - Bolts", "A193 B7"),
            ("Nut Material", "A194 2H"),
            ("Coating", "HDG"),
            ("Material Standard", "ASME B18.2.1"),
        ],
    );
    let mut sheet = Worksheet::new("BN-1");
    sheet.define_name("MaterialBolts", at("K11"));
    sheet.define_name("Remarks", at("K20"));

    populate_bolt(&mut sheet, &record).expect("populate");

    assert_eq!(sheet.text(at("G7")), "BN-1");
    assert_eq!(sheet.text(at("G9")), "STUD BOLT");
    assert_eq!(sheet.text(at("G11")), "A193 B7");
    assert_eq!(sheet.text(at("G12")), "A194 2H");
    assert_eq!(sheet.text(at("G13")), "HDG");
    assert_eq!(sheet.text(at("G15")), "ASME B18.2.1");
    assert_eq!(sheet.text(at("K11")), "A193 B7");
    assert!(sheet.is_blank(at("K20")));
}

#[test]
fn test_dispatch_by_category() {
    let record = record_with("X-1", &[]);
    let expected = [
        (Category::PipingPart, "FITTING SPECIFICATION"),
        (Category::Gasket, "GASKET DATA SHEET"),
        (Category::Valve, "VALVE DATA SHEET"),
    ];
    for (category, title) in expected {
        let mut sheet = Worksheet::new("X");
        populate(&mut sheet, category, &record, &layout()).expect("populate");
        assert_eq!(sheet.text(at("D4")), title);
    }

    let mut sheet = Worksheet::new("X");
    populate(&mut sheet, Category::Bolt, &record, &layout()).expect("populate");
    assert_eq!(sheet.text(at("G7")), "X-1");
    assert!(sheet.is_blank(at("D4")));
}

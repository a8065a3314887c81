//! Integration tests for datasheet generation
//!
//! These tests load a catalog document from disk, collect its leaf records
//! and run the datasheet generator against template workbooks in a temporary
//! project directory.

use piping_datasheets::app::services::catalog::Catalog;
use piping_datasheets::app::services::datasheet_generator::DatasheetGenerator;
use piping_datasheets::app::services::grid::{
    CellRef, JsonWorkbookStore, Workbook, WorkbookStore, Worksheet,
};
use piping_datasheets::config::Config;
use piping_datasheets::{Category, Record};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

fn at(address: &str) -> CellRef {
    CellRef::parse(address).unwrap()
}

/// Catalog export with one folder per material category
fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let document = json!({
        "name": "Catalogs",
        "children": [{
            "name": "JLE",
            "children": [{
                "name": "Materials",
                "children": [
                    {
                        "name": "Pipe & Fittings",
                        "children": [
                            {
                                "name": "Pipe SMLS 1/2-2",
                                "attributes": {
                                    "Code": "PP-100",
                                    "Type": "PIPE",
                                    "Seamless / Welded": "SEAMLESS",
                                    "Material": "A106 Gr.B",
                                    "Size (Min)": "1/2",
                                    "Size (Max)": "2",
                                    "JLE Pipe Class": "150JX00"
                                }
                            },
                            {
                                "name": "Spiral wound gasket",
                                "attributes": {
                                    "Code": "GK-10",
                                    "Type": "SPIRAL WOUND GASKET",
                                    "Size (Min)": "2",
                                    "Size (Max)": "3"
                                }
                            }
                        ]
                    },
                    {
                        "name": "Valves",
                        "children": [{
                            "name": "Gate valve",
                            "attributes": {
                                "Code": "GV-12",
                                "Type": "GATE VALVE",
                                "Size (Min)": "2",
                                "Size (Max)": "4"
                            }
                        }]
                    },
                    {
                        "name": "Bolts & Nuts",
                        "children": [{
                            "name": "Stud bolt",
                            "attributes": {
                                "Code": "BN-1",
                                "Type": "STUD BOLT",
                                "Bolt material": "A193 B7"
                            }
                        }]
                    }
                ]
            }]
        }]
    });

    let path = dir.join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}

fn template(sheet_name: &str) -> Workbook {
    let mut sheet = Worksheet::new(sheet_name);
    sheet.set_text(at("B2"), "DATA SHEET");
    sheet.set_text(at("D28"), "Size");
    Workbook::new().with_sheet(sheet)
}

fn setup_project() -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::default().with_project_root(temp_dir.path());
    let store = JsonWorkbookStore::new();
    let templates = config.templates_dir();
    std::fs::create_dir_all(&templates).unwrap();

    for (name, sheet) in [
        (&config.templates.piping_part, &config.templates.piping_part_sheet),
        (&config.templates.valve, &config.templates.valve_sheet),
        (&config.templates.bolt, &config.templates.bolt_sheet),
    ] {
        let mut workbook = template(sheet);
        store
            .save(&mut workbook, &templates.join(format!("{}.json", name)))
            .unwrap();
    }

    (temp_dir, config)
}

fn load_records(config: &Config, dir: &Path) -> Vec<Record> {
    let catalog = Catalog::load(&write_catalog(dir)).unwrap();
    catalog.collect_leaf_records(&config.catalog)
}

#[test]
fn test_catalog_to_workbooks() {
    let (temp_dir, config) = setup_project();
    let records = load_records(&config, temp_dir.path());
    assert_eq!(records.len(), 4);

    let store = JsonWorkbookStore::new();
    let report = DatasheetGenerator::new(&config, &store).generate(&records);

    assert_eq!(report.created, 4);
    assert!(report.skipped.is_empty());
    assert!(report.save_failures.is_empty());
    assert_eq!(report.outputs.len(), 3);
    assert!(report.message.starts_with("Generated 4 datasheet(s)."));

    let output = config.output_dir();
    let piping = store
        .open(&output.join("Piping parts data sheets.json"))
        .unwrap();
    // Gaskets fall back to the piping part workbook
    assert_eq!(piping.sheet_names(), vec!["PP-100", "GK-10"]);

    let pipe = piping.sheet("PP-100").unwrap();
    assert_eq!(pipe.text(at("G7")), "PP-100");
    assert_eq!(pipe.text(at("G10")), "SEAMLESS");
    assert_eq!(pipe.text(at("D29")), "1/2");
    assert_eq!(pipe.text(at("D34")), "2");
    assert!(pipe.is_blank(at("D35")));
    assert_eq!(pipe.text(at("B2")), "DATA SHEET");

    let valves = store.open(&output.join("Valve data sheets.json")).unwrap();
    assert_eq!(valves.sheet_names(), vec!["GV-12"]);
    let valve = valves.sheet("GV-12").unwrap();
    assert_eq!(valve.text(at("F7")), "GV-12");
    assert_eq!(valve.text(at("D33")), "2");
    assert_eq!(valve.text(at("D37")), "4");
    assert_eq!(valve.formula(at("H33")), Some("IFERROR(F33*G33,0)"));

    let bolts = store.open(&output.join("Bolts data sheets.json")).unwrap();
    assert_eq!(bolts.sheet_names(), vec!["BN-1"]);
}

#[test]
fn test_template_workbooks_are_untouched() {
    let (temp_dir, config) = setup_project();
    let records = load_records(&config, temp_dir.path());
    let store = JsonWorkbookStore::new();

    let template_path = config
        .templates_dir()
        .join(format!("{}.json", config.templates.piping_part));
    let before = std::fs::read_to_string(&template_path).unwrap();

    DatasheetGenerator::new(&config, &store).generate(&records);

    let after = std::fs::read_to_string(&template_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_rerun_overwrites_outputs() {
    let (temp_dir, config) = setup_project();
    let records = load_records(&config, temp_dir.path());
    let store = JsonWorkbookStore::new();
    let generator = DatasheetGenerator::new(&config, &store);

    generator.generate(&records);
    let second = generator.generate(&records);
    assert_eq!(second.created, 4);

    let piping = store
        .open(&config.output_dir().join("Piping parts data sheets.json"))
        .unwrap();
    assert_eq!(piping.sheet_names(), vec!["PP-100", "GK-10"]);
}

#[test]
fn test_records_follow_configured_folder_order() {
    let (temp_dir, config) = setup_project();
    let records = load_records(&config, temp_dir.path());

    let folders: Vec<&str> = records.iter().map(|r| r.folder.as_str()).collect();
    assert_eq!(
        folders,
        vec!["Bolts & Nuts", "Pipe & Fittings", "Pipe & Fittings", "Valves"]
    );

    let categories: Vec<Category> = records
        .iter()
        .map(piping_datasheets::app::services::classifier::category_of)
        .collect();
    assert_eq!(
        categories,
        vec![
            Category::Bolt,
            Category::PipingPart,
            Category::Gasket,
            Category::Valve
        ]
    );
}

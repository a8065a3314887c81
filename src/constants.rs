//! Application constants for the piping datasheet generator
//!
//! This module contains the template names, worksheet layout coordinates,
//! classification vocabularies and the canonical nominal size table used
//! throughout the application.

// =============================================================================
// Template and Output Files
// =============================================================================

/// Piping parts template workbook (base name, extension supplied by the store)
pub const PIPING_PART_TEMPLATE: &str = "Piping parts data sheet template - for program";

/// Gasket template workbook
pub const GASKET_TEMPLATE: &str = "Piping gasket data sheet template - for program";

/// Valve template workbook
pub const VALVE_TEMPLATE: &str = "Valve data sheet template - for program";

/// Bolts and nuts template workbook
pub const BOLT_TEMPLATE: &str = "Bolts data sheet template - for program";

/// Pipe class summary template workbook
pub const PIPE_CLASS_TEMPLATE: &str = "Pipe class template - WIP";

/// Output workbook names per category
pub const PIPING_PART_OUTPUT: &str = "Piping parts data sheets";
pub const GASKET_OUTPUT: &str = "Gasket data sheets";
pub const VALVE_OUTPUT: &str = "Valve data sheets";
pub const BOLT_OUTPUT: &str = "Bolts data sheets";

/// Template sheet names inside each category workbook
pub mod template_sheets {
    pub const PIPING_PART: &str = "Template-PP";
    pub const GASKET: &str = "Template-G";
    pub const VALVE: &str = "Template-V";
    pub const BOLT: &str = "Template-B";
}

/// Environment variable overriding the project root
pub const PROJECT_ROOT_ENV: &str = "PIPING_DATASHEETS_ROOT";

/// Application directory name under the user config directory
pub const APP_CONFIG_DIR: &str = "piping-datasheets";

/// Config file name inside the application config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Catalog Layout
// =============================================================================

/// Path from the catalog root to the materials folder
pub const MATERIALS_PATH: &[&str] = &["JLE", "Materials"];

/// Category folders under the materials folder, in display order
pub const MATERIAL_FOLDERS: &[&str] = &["Bolts & Nuts", "Pipe & Fittings", "Valves"];

// =============================================================================
// Sheet Naming
// =============================================================================

/// Worksheet names are capped at this many characters
pub const SHEET_NAME_MAX_LEN: usize = 31;

/// Characters replaced with `_` in sheet and file names
pub const INVALID_NAME_CHARS: &[char] = &[
    '<', '>', ':', '"', '/', '\\', '|', '?', '*', '[', ']', '\0',
];

/// Fallback sheet name for records without any identifying value
pub const DEFAULT_SHEET_NAME: &str = "ITEM";

/// Fallback file name for pipe class workbooks
pub const DEFAULT_CLASS_FILE_NAME: &str = "PIPECLASS";

/// Revision written into every datasheet footer
pub const DATASHEET_REVISION: &str = "1.0";

// =============================================================================
// Size Table Layout
// =============================================================================

/// Header text that marks the size table
pub const SIZE_HEADER_TEXT: &str = "Size";

/// Size tables never start above this row on piping part and gasket sheets
pub const SIZE_TABLE_MIN_ROW: u32 = 29;

/// Size tables never start above this row on valve sheets
pub const VALVE_SIZE_TABLE_MIN_ROW: u32 = 33;

/// Default quantity written into each size row
pub const DEFAULT_ORDER_QUANTITY: f64 = 0.0;

/// Size table column positions (1-based)
pub mod size_columns {
    /// Size label (D)
    pub const SIZE: u32 = 4;
    /// Quantity ordered on piping part and gasket sheets (F)
    pub const QUANTITY: u32 = 6;
    /// Unit price on piping part and gasket sheets (G)
    pub const UNIT_PRICE: u32 = 7;
    /// Unit price on valve sheets (F)
    pub const VALVE_UNIT_PRICE: u32 = 6;
    /// Quantity on valve sheets (G)
    pub const VALVE_QUANTITY: u32 = 7;
    /// Total price (H)
    pub const TOTAL: u32 = 8;
}

// =============================================================================
// Pipe Class Summary Layout
// =============================================================================

/// Summary column positions (1-based)
pub mod summary_columns {
    /// Type lines (A)
    pub const TYPE: u32 = 1;
    /// Description lines (E)
    pub const DESCRIPTION: u32 = 5;
    /// Minimum size (J)
    pub const SIZE_MIN: u32 = 10;
    /// Maximum size (K)
    pub const SIZE_MAX: u32 = 11;
    /// Schedule, class or design code (L)
    pub const SCHEDULE_CLASS: u32 = 12;
    /// Item code (N)
    pub const CODE: u32 = 14;
}

/// First row written on a summary sheet
pub const SUMMARY_START_ROW: u32 = 8;

/// Rows reserved per item on a summary sheet
pub const SUMMARY_BLOCK_ROWS: u32 = 4;

/// Columns unmerged before a section header is written
pub const HEADER_UNMERGE_WIDTH: u32 = 20;

/// Summary sheet name after generation
pub const SUMMARY_SHEET_NAME: &str = "PIPING PARTS";

/// Title cell and prefix on a summary sheet
pub const SUMMARY_TITLE_CELL: &str = "D3";
pub const SUMMARY_TITLE_PREFIX: &str = "PIPING CLASS BASIC DATAs - ";

/// Last printed column on a summary sheet
pub const SUMMARY_PRINT_COLUMN: &str = "N";

// =============================================================================
// Classification Vocabularies
// =============================================================================

/// Words that mark a record as a valve when found in its type text
pub const VALVE_WORDS: &[&str] = &[
    "VALVE",
    "GATE",
    "GLOBE",
    "CHECK",
    "BALL",
    "BUTTERFLY",
    "PLUG",
    "DIAPHRAGM",
    "CONTROL",
    "SOLENOID",
    "SAFETY",
    "RELIEF",
    "PRESSURE REDUCING",
    "PSV",
    "PRV",
    "SRV",
    "NRV",
];

/// Attributes that only valve records carry
pub const VALVE_INDICATOR_KEYS: &[&str] = &[
    "Medium",
    "Media",
    "Service",
    "Design pressure",
    "Design temperature",
    "Design code",
    "Piping connection",
    "End connection",
    "Additional specification 1",
    "Additional specification 2",
    "Body material",
    "Seat material",
    "Trim material",
];

/// Sub-category keyword groups, tested in order
pub mod sub_category_keywords {
    pub const FLANGES: &[&str] = &["FLANGE", "WELD NECK", "WN", "SLIP ON", "SO ", "BLIND"];
    pub const BRANCH_FITTINGS: &[&str] = &["OLET", "BRANCH"];
    pub const FITTINGS: &[&str] = &["ELBOW", "TEE", "REDUCER", "COUPLING", "CAP", "BEND"];
    pub const PIPE: &[&str] = &["PIPE", "SEAMLESS", "WELDED", "SMLS"];
}

// =============================================================================
// Pipe Classes
// =============================================================================

/// Structural pattern of a pipe class code (e.g. 150JX00)
pub const PIPE_CLASS_PATTERN: &str = r"(?i)^[0-9]{1,4}J[A-Z]{1,2}[0-9]{2}$";

/// Attributes that list the pipe classes an item belongs to
pub const CLASS_MEMBERSHIP_KEYS: &[&str] = &[
    "JLE Pipe Class",
    "JLE Pipe Class 1",
    "JLE Possible Pipe Class",
    "Piping class",
    "Pipe class",
    "Piping classes that use this item (for piping class)",
];

/// Separators between pipe class tokens in membership attributes
pub const CLASS_TOKEN_SEPARATORS: &[char] = &[',', ';', '/', '\\', '\r', '\n', '\t', ' '];

/// Ratings at or above this value are ASME classes
pub const ASME_RATING_THRESHOLD: f64 = 150.0;

// =============================================================================
// Nominal Sizes
// =============================================================================

/// Canonical nominal pipe sizes, smallest first, as (inch token, DN token)
pub const NOMINAL_SIZES: &[(&str, &str)] = &[
    ("1/2", "DN15"),
    ("3/4", "DN20"),
    ("1", "DN25"),
    ("1 1/4", "DN32"),
    ("1 1/2", "DN40"),
    ("2", "DN50"),
    ("2 1/2", "DN65"),
    ("3", "DN80"),
    ("3 1/2", "DN90"),
    ("4", "DN100"),
    ("5", "DN125"),
    ("6", "DN150"),
    ("8", "DN200"),
    ("10", "DN250"),
    ("12", "DN300"),
    ("14", "DN350"),
    ("16", "DN400"),
    ("18", "DN450"),
    ("20", "DN500"),
    ("22", "DN550"),
    ("24", "DN600"),
    ("26", "DN650"),
    ("28", "DN700"),
    ("30", "DN750"),
    ("32", "DN800"),
    ("34", "DN850"),
    ("36", "DN900"),
];

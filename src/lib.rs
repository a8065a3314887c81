//! Piping Datasheets Library
//!
//! A Rust library that turns engineering catalog records (piping parts,
//! gaskets, valves and bolting) into populated datasheet workbooks.
//!
//! This library provides tools for:
//! - Resolving loosely named catalog attributes with exact and fuzzy passes
//! - Classifying records into datasheet categories and piping sub-categories
//! - Expanding nominal size ranges with inch and DN conversions
//! - Placing resolved values into template worksheets, including size tables
//! - Discovering, grouping and summarising pipe classes across the catalog

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod attribute_resolver;
        pub mod catalog;
        pub mod classifier;
        pub mod datasheet_generator;
        pub mod grid;
        pub mod pipe_class;
        pub mod sheet_populator;
        pub mod size_range;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AttributeMap, CatalogItem, Category, Record, SubCategory};
pub use config::Config;

/// Result type alias for datasheet generation
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog loading, template handling and sheet population
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed
    #[error("JSON error in '{file}': {message}")]
    Json {
        file: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A required template file or directory is absent
    #[error("Configuration missing: {path}")]
    ConfigurationMissing { path: String },

    /// Catalog document does not have the expected shape
    #[error("Catalog format error: {message}")]
    CatalogFormat { message: String },

    /// Cell address could not be parsed
    #[error("Invalid cell address: '{address}'")]
    InvalidCellAddress { address: String },

    /// Worksheet lookup failed
    #[error("Worksheet not found: {name}")]
    SheetNotFound { name: String },

    /// Template workbook has no sheet to clone
    #[error("Template workbook '{workbook}' has no sheets")]
    TemplateSheetMissing { workbook: String },

    /// Generation of one output failed
    #[error("Generation failed for '{item}': {message}")]
    ItemGeneration { item: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with the offending file
    pub fn json(
        file: impl Into<String>,
        message: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::Json {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing-prerequisite error
    pub fn configuration_missing(path: impl Into<String>) -> Self {
        Self::ConfigurationMissing { path: path.into() }
    }

    /// Create a catalog format error
    pub fn catalog_format(message: impl Into<String>) -> Self {
        Self::CatalogFormat {
            message: message.into(),
        }
    }

    /// Create an invalid cell address error
    pub fn invalid_cell_address(address: impl Into<String>) -> Self {
        Self::InvalidCellAddress {
            address: address.into(),
        }
    }

    /// Create a sheet not found error
    pub fn sheet_not_found(name: impl Into<String>) -> Self {
        Self::SheetNotFound { name: name.into() }
    }

    /// Create a template sheet missing error
    pub fn template_sheet_missing(workbook: impl Into<String>) -> Self {
        Self::TemplateSheetMissing {
            workbook: workbook.into(),
        }
    }

    /// Create an item generation error
    pub fn item_generation(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ItemGeneration {
            item: item.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            file: "unknown".to_string(),
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

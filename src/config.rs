//! Configuration management and validation.
//!
//! Provides the project paths, template names, catalog layout and worksheet
//! layout settings used by the generators. Configuration is layered:
//! built-in defaults, then an optional JSON file, then the environment,
//! then command-line overrides.

use crate::constants::{
    APP_CONFIG_DIR, BOLT_TEMPLATE, CONFIG_FILE_NAME, DEFAULT_ORDER_QUANTITY, GASKET_TEMPLATE,
    HEADER_UNMERGE_WIDTH, MATERIAL_FOLDERS, MATERIALS_PATH, PIPE_CLASS_TEMPLATE,
    PIPING_PART_TEMPLATE, PROJECT_ROOT_ENV, SHEET_NAME_MAX_LEN, SIZE_TABLE_MIN_ROW,
    SUMMARY_BLOCK_ROWS, SUMMARY_START_ROW, VALVE_SIZE_TABLE_MIN_ROW, VALVE_TEMPLATE,
    template_sheets,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project, template and output locations
    pub paths: PathsConfig,

    /// Template workbook and sheet names
    pub templates: TemplateNames,

    /// Where material folders live in the catalog
    pub catalog: CatalogConfig,

    /// Worksheet layout settings
    pub layout: LayoutConfig,
}

/// Project directory layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Project root; templates and output default to subfolders of it
    pub project_root: PathBuf,

    /// Template directory (defaults to `<project_root>/templates`)
    pub templates_dir: Option<PathBuf>,

    /// Output directory (defaults to `<project_root>/output`)
    pub output_dir: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            templates_dir: None,
            output_dir: None,
        }
    }
}

/// Template workbook base names and template sheet names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateNames {
    pub piping_part: String,
    pub gasket: String,
    pub valve: String,
    pub bolt: String,
    pub pipe_class: String,

    pub piping_part_sheet: String,
    pub gasket_sheet: String,
    pub valve_sheet: String,
    pub bolt_sheet: String,
}

impl Default for TemplateNames {
    fn default() -> Self {
        Self {
            piping_part: PIPING_PART_TEMPLATE.to_string(),
            gasket: GASKET_TEMPLATE.to_string(),
            valve: VALVE_TEMPLATE.to_string(),
            bolt: BOLT_TEMPLATE.to_string(),
            pipe_class: PIPE_CLASS_TEMPLATE.to_string(),
            piping_part_sheet: template_sheets::PIPING_PART.to_string(),
            gasket_sheet: template_sheets::GASKET.to_string(),
            valve_sheet: template_sheets::VALVE.to_string(),
            bolt_sheet: template_sheets::BOLT.to_string(),
        }
    }
}

/// Catalog folder layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Folder names from the catalog root down to the materials folder
    pub materials_path: Vec<String>,

    /// Category folders collected under the materials folder
    pub material_folders: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            materials_path: MATERIALS_PATH.iter().map(|s| s.to_string()).collect(),
            material_folders: MATERIAL_FOLDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Worksheet layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Earliest size table row on piping part and gasket sheets
    pub size_table_min_row: u32,

    /// Earliest size table row on valve sheets
    pub valve_size_table_min_row: u32,

    /// Quantity written into each size row
    pub default_order_quantity: f64,

    /// Maximum worksheet name length
    pub sheet_name_max_len: usize,

    /// First row written on a pipe class summary
    pub summary_start_row: u32,

    /// Rows reserved per summary item
    pub summary_block_rows: u32,

    /// Columns unmerged before writing a summary section header
    pub header_unmerge_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size_table_min_row: SIZE_TABLE_MIN_ROW,
            valve_size_table_min_row: VALVE_SIZE_TABLE_MIN_ROW,
            default_order_quantity: DEFAULT_ORDER_QUANTITY,
            sheet_name_max_len: SHEET_NAME_MAX_LEN,
            summary_start_row: SUMMARY_START_ROW,
            summary_block_rows: SUMMARY_BLOCK_ROWS,
            header_unmerge_width: HEADER_UNMERGE_WIDTH,
        }
    }
}

impl Config {
    /// Create configuration rooted at a project directory
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.paths.project_root = root.into();
        self
    }

    /// Override the template directory
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.paths.templates_dir = Some(dir.into());
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.paths.output_dir = Some(dir.into());
        self
    }

    /// Override the worksheet layout
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Resolved template directory
    pub fn templates_dir(&self) -> PathBuf {
        self.paths
            .templates_dir
            .clone()
            .unwrap_or_else(|| self.paths.project_root.join("templates"))
    }

    /// Resolved output directory
    pub fn output_dir(&self) -> PathBuf {
        self.paths
            .output_dir
            .clone()
            .unwrap_or_else(|| self.paths.project_root.join("output"))
    }

    /// Default config file location (`<config dir>/piping-datasheets/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_CONFIG_DIR).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file '{}'", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Error::json(
                path.display().to_string(),
                "Invalid configuration document",
                e,
            )
        })
    }

    /// Load configuration in layers: defaults, file, environment
    ///
    /// # Arguments
    ///
    /// * `config_file` - Optional JSON config file; missing files are an error
    ///
    /// # Returns
    ///
    /// The merged configuration (not yet validated)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        if let Ok(root) = std::env::var(PROJECT_ROOT_ENV) {
            if root.trim().is_empty() {
                warn!("{} is set but empty; ignoring", PROJECT_ROOT_ENV);
            } else {
                debug!("Project root from environment: {}", root);
                config.paths.project_root = PathBuf::from(root);
            }
        }

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.layout.size_table_min_row == 0 || self.layout.valve_size_table_min_row == 0 {
            return Err(Error::configuration(
                "Size table rows are 1-based and must be greater than zero",
            ));
        }
        if self.layout.summary_start_row == 0 {
            return Err(Error::configuration(
                "Summary start row must be greater than zero",
            ));
        }
        if self.layout.summary_block_rows == 0 {
            return Err(Error::configuration(
                "Summary block height must be at least one row",
            ));
        }
        if self.layout.sheet_name_max_len == 0 {
            return Err(Error::configuration(
                "Sheet name length limit must be greater than zero",
            ));
        }
        if !self.layout.default_order_quantity.is_finite() {
            return Err(Error::configuration("Default order quantity must be finite"));
        }
        let names = [
            &self.templates.piping_part,
            &self.templates.gasket,
            &self.templates.valve,
            &self.templates.bolt,
            &self.templates.pipe_class,
        ];
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(Error::configuration("Template names must not be empty"));
        }
        Ok(())
    }

    /// Ensure the output directory exists
    pub fn ensure_output_directory(&self) -> Result<PathBuf> {
        let dir = self.output_dir();
        std::fs::create_dir_all(&dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory '{}'", dir.display()),
                e,
            )
        })?;
        Ok(dir)
    }
}

/// Locate a template file by base name, ignoring case
///
/// Looks directly inside `dir` for `<base_name>.<extension>`. The comparison
/// ignores case so template folders copied between filesystems still match.
pub fn find_template(dir: &Path, base_name: &str, extension: &str) -> Option<PathBuf> {
    let wanted = format!("{}.{}", base_name, extension).to_lowercase();

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| entry.file_name().to_string_lossy().to_lowercase() == wanted)
        .map(|entry| entry.into_path())
}

//! Workbook persistence seam

use super::workbook::Workbook;
use crate::{Error, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Opens templates and saves generated workbooks
pub trait WorkbookStore {
    /// File extension handled by the store, without the dot
    fn extension(&self) -> &str;

    fn open(&self, path: &Path) -> Result<Workbook>;

    /// Persist a workbook; the modification timestamp is refreshed
    fn save(&self, workbook: &mut Workbook, path: &Path) -> Result<()>;
}

/// Stores workbooks as pretty-printed JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWorkbookStore;

impl JsonWorkbookStore {
    pub const EXTENSION: &'static str = "json";

    pub fn new() -> Self {
        Self
    }
}

impl WorkbookStore for JsonWorkbookStore {
    fn extension(&self) -> &str {
        Self::EXTENSION
    }

    fn open(&self, path: &Path) -> Result<Workbook> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open workbook: {}", path.display()), e))?;
        let workbook: Workbook = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            Error::json(
                path.display().to_string(),
                "Failed to parse workbook",
                e,
            )
        })?;
        debug!(
            "Opened workbook {} ({} sheet(s))",
            path.display(),
            workbook.sheet_count()
        );
        Ok(workbook)
    }

    fn save(&self, workbook: &mut Workbook, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!("Failed to create directory: {}", parent.display()), e)
            })?;
        }

        workbook.touch();
        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to create workbook: {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, workbook).map_err(|e| {
            Error::json(
                path.display().to_string(),
                "Failed to serialize workbook",
                e,
            )
        })?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to write workbook: {}", path.display()), e))?;

        debug!("Saved workbook {}", path.display());
        Ok(())
    }
}

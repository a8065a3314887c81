//! Workbook: ordered worksheets plus document properties

use super::worksheet::Worksheet;
use crate::constants::SHEET_NAME_MAX_LEN;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbookProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workbook {
    pub properties: WorkbookProperties,
    pub sheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: Worksheet) -> Self {
        self.sheets.push(sheet);
        self
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Worksheet::name).collect()
    }

    /// Position of a sheet by case-insensitive name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets
            .iter()
            .position(|sheet| sheet.name().eq_ignore_ascii_case(name))
    }

    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheet_index(name).map(|index| &self.sheets[index])
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.sheet_index(name).map(move |index| &mut self.sheets[index])
    }

    pub fn sheet_at(&self, index: usize) -> Option<&Worksheet> {
        self.sheets.get(index)
    }

    pub fn sheet_at_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.sheets.get_mut(index)
    }

    /// Append a sheet, adjusting its name until unique
    pub fn add_sheet(&mut self, sheet: Worksheet) -> usize {
        self.push_unique(sheet, SHEET_NAME_MAX_LEN)
    }

    /// Copy the sheet at `source` to the end of the workbook under `name`.
    ///
    /// Returns the index of the copy. Name collisions get a ` (n)` suffix and
    /// the final name never exceeds `max_name_len` characters.
    pub fn copy_sheet(&mut self, source: usize, name: &str, max_name_len: usize) -> Result<usize> {
        let mut copy = self
            .sheets
            .get(source)
            .cloned()
            .ok_or_else(|| Error::sheet_not_found(format!("#{}", source)))?;
        copy.rename(name);
        let index = self.push_unique(copy, max_name_len);
        debug!(
            "Copied sheet #{} to '{}'",
            source,
            self.sheets[index].name()
        );
        Ok(index)
    }

    pub fn remove_sheet(&mut self, name: &str) -> Option<Worksheet> {
        self.sheet_index(name).map(|index| self.sheets.remove(index))
    }

    fn push_unique(&mut self, mut sheet: Worksheet, max_name_len: usize) -> usize {
        let name = self.unique_sheet_name(sheet.name(), max_name_len);
        sheet.rename(name);
        self.sheets.push(sheet);
        self.sheets.len() - 1
    }

    /// Name derived from `base` that no sheet uses, at most `max_len` characters
    pub fn unique_sheet_name(&self, base: &str, max_len: usize) -> String {
        let base = truncate_chars(base, max_len);
        if self.sheet_index(&base).is_none() {
            return base;
        }

        let mut n = 2;
        loop {
            let suffix = format!(" ({})", n);
            let keep = max_len.saturating_sub(suffix.chars().count());
            let candidate = format!("{}{}", truncate_chars(&base, keep), suffix);
            if self.sheet_index(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn touch(&mut self) {
        self.properties.modified = Some(Utc::now());
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

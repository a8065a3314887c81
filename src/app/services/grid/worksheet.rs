//! Worksheet: sparse cells, merges, print area and defined names

use super::cell::{Cell, CellRange, CellRef, CellValue, HorizontalAlignment};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Worksheet {
    pub name: String,
    pub cells: BTreeMap<CellRef, Cell>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merged: Vec<CellRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_area: Option<CellRange>,
    /// Sheet-scoped names, each bound to one cell
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub defined_names: BTreeMap<String, CellRef>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // ---- reads ----

    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.cells.get(&at)
    }

    /// Display text of a cell, empty when absent
    pub fn text(&self, at: CellRef) -> String {
        self.cells
            .get(&at)
            .map(|cell| cell.value.as_text())
            .unwrap_or_default()
    }

    pub fn text_at(&self, address: &str) -> Result<String> {
        Ok(self.text(CellRef::parse(address)?))
    }

    pub fn value(&self, at: CellRef) -> CellValue {
        self.cells
            .get(&at)
            .map(|cell| cell.value.clone())
            .unwrap_or_default()
    }

    pub fn formula(&self, at: CellRef) -> Option<&str> {
        self.cells.get(&at).and_then(|cell| cell.formula.as_deref())
    }

    /// No value and no formula
    pub fn is_blank(&self, at: CellRef) -> bool {
        self.cells.get(&at).is_none_or(Cell::is_blank)
    }

    pub fn has_formula(&self, at: CellRef) -> bool {
        self.cells.get(&at).is_some_and(Cell::has_formula)
    }

    pub fn is_bold(&self, at: CellRef) -> bool {
        self.cells.get(&at).is_some_and(|cell| cell.style.bold)
    }

    pub fn alignment(&self, at: CellRef) -> Option<HorizontalAlignment> {
        self.cells.get(&at).and_then(|cell| cell.style.horizontal)
    }

    // ---- writes ----

    fn cell_mut(&mut self, at: CellRef) -> &mut Cell {
        self.cells.entry(at).or_default()
    }

    /// Write text, replacing any formula
    pub fn set_text(&mut self, at: CellRef, text: impl Into<String>) {
        let cell = self.cell_mut(at);
        cell.value = CellValue::Text(text.into());
        cell.formula = None;
    }

    pub fn set_text_at(&mut self, address: &str, text: impl Into<String>) -> Result<()> {
        self.set_text(CellRef::parse(address)?, text);
        Ok(())
    }

    pub fn set_number(&mut self, at: CellRef, number: f64) {
        let cell = self.cell_mut(at);
        cell.value = CellValue::Number(number);
        cell.formula = None;
    }

    /// Store a formula; the cached value is dropped
    pub fn set_formula(&mut self, at: CellRef, formula: impl Into<String>) {
        let cell = self.cell_mut(at);
        cell.formula = Some(formula.into());
        cell.value = CellValue::Empty;
    }

    /// Remove value and formula, keep style
    pub fn clear_contents(&mut self, at: CellRef) {
        if let Some(cell) = self.cells.get_mut(&at) {
            cell.value = CellValue::Empty;
            cell.formula = None;
            if cell.style.is_default() {
                self.cells.remove(&at);
            }
        }
    }

    /// Remove the cell entirely, style included
    pub fn clear(&mut self, at: CellRef) {
        self.cells.remove(&at);
    }

    pub fn set_bold(&mut self, at: CellRef, bold: bool) {
        self.cell_mut(at).style.bold = bold;
    }

    pub fn set_alignment(&mut self, at: CellRef, alignment: HorizontalAlignment) {
        self.cell_mut(at).style.horizontal = Some(alignment);
    }

    pub fn set_print_area(&mut self, range: CellRange) {
        self.print_area = Some(range);
    }

    // ---- merged ranges ----

    pub fn merge(&mut self, range: CellRange) {
        self.merged.retain(|existing| *existing != range);
        self.merged.push(range);
    }

    pub fn merged_range_at(&self, at: CellRef) -> Option<CellRange> {
        self.merged.iter().copied().find(|range| range.contains(at))
    }

    pub fn is_merged(&self, at: CellRef) -> bool {
        self.merged_range_at(at).is_some()
    }

    /// Unmerge every range touching `row` between columns `1..=width`
    pub fn unmerge_row(&mut self, row: u32, width: u32) {
        let before = self.merged.len();
        self.merged
            .retain(|range| !range.intersects_row(row, 1, width));
        let removed = before - self.merged.len();
        if removed > 0 {
            trace!("Unmerged {} range(s) on row {}", removed, row);
        }
    }

    // ---- defined names ----

    pub fn define_name(&mut self, name: impl Into<String>, at: CellRef) {
        self.defined_names.insert(name.into(), at);
    }

    /// Cell bound to a name (case-insensitive)
    pub fn named_cell(&self, name: &str) -> Option<CellRef> {
        self.defined_names
            .iter()
            .find(|(defined, _)| defined.eq_ignore_ascii_case(name))
            .map(|(_, at)| *at)
    }

    /// Write text through a defined name; false when the name is unknown
    pub fn set_by_name(&mut self, name: &str, text: impl Into<String>) -> bool {
        match self.named_cell(name) {
            Some(at) => {
                self.set_text(at, text);
                true
            }
            None => false,
        }
    }

    // ---- search ----

    /// Locate a label cell outside merged ranges.
    ///
    /// First pass compares trimmed text case-insensitively; the second pass
    /// also ignores dots. Cells are scanned row-major.
    pub fn find_text(&self, label: &str) -> Option<CellRef> {
        let wanted = label.trim().to_uppercase();
        if wanted.is_empty() {
            return None;
        }

        let candidates = || {
            self.cells
                .iter()
                .filter(|(at, cell)| !cell.value.is_empty() && !self.is_merged(**at))
                .map(|(at, cell)| (*at, cell.value.as_text().trim().to_uppercase()))
        };

        if let Some((at, _)) = candidates().find(|(_, text)| *text == wanted) {
            return Some(at);
        }

        let undotted = wanted.replace('.', "");
        candidates()
            .find(|(_, text)| text.replace('.', "") == undotted)
            .map(|(at, _)| at)
    }

    /// Highest row holding any cell
    pub fn last_used_row(&self) -> u32 {
        self.cells.keys().map(|at| at.row).max().unwrap_or(0)
    }
}

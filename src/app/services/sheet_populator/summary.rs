//! Pipe class summary writer
//!
//! The summary sheet is filled top to bottom with a row cursor. Every item
//! owns a fixed block of rows; lines a record does not fill are cleared so a
//! reused template never shows values from an earlier run.

use super::fields::{BoltSummary, GasketSummary, PipingPartSummary, ValveSummary};
use crate::app::models::{Category, Record, SubCategory};
use crate::app::services::classifier::category_of;
use crate::app::services::grid::{CellRange, CellRef, HorizontalAlignment, Worksheet};
use crate::config::LayoutConfig;
use crate::constants::{SUMMARY_PRINT_COLUMN, summary_columns};
use crate::Result;
use tracing::{debug, info};

/// Separator used when lines overflow a block and are folded into its last line
const OVERFLOW_SEPARATOR: &str = "; ";

/// Cell content of one item block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryBlock {
    /// Column A lines, positional
    pub type_lines: Vec<String>,
    /// Column E lines, positional
    pub description_lines: Vec<String>,
    pub size_min: String,
    pub size_max: String,
    pub schedule_class: String,
    pub item_code: String,
    /// Left-align the size-min cell (bolting "MATCHING FLANGE")
    pub left_align_size_min: bool,
}

impl From<&PipingPartSummary> for SummaryBlock {
    fn from(view: &PipingPartSummary) -> Self {
        Self {
            type_lines: vec![view.type_text.trim().to_string(), view.seam_weld.trim().to_string()],
            description_lines: vec![
                view.material.clone(),
                view.standard.clone(),
                view.connection.clone(),
            ],
            size_min: view.size_min.clone(),
            size_max: view.size_max.clone(),
            schedule_class: view.schedule_class.clone(),
            item_code: view.item_code.clone(),
            left_align_size_min: false,
        }
    }
}

impl From<&BoltSummary> for SummaryBlock {
    fn from(view: &BoltSummary) -> Self {
        Self {
            type_lines: vec![view.type_text.trim().to_string()],
            description_lines: vec![
                view.standard.clone(),
                view.bolt_material.clone(),
                view.nut_material.clone(),
            ],
            size_min: "MATCHING FLANGE".to_string(),
            item_code: view.item_code.clone(),
            left_align_size_min: true,
            ..Self::default()
        }
    }
}

impl From<&GasketSummary> for SummaryBlock {
    fn from(view: &GasketSummary) -> Self {
        Self {
            type_lines: vec![view.type_text.trim().to_string(), view.ring.trim().to_string()],
            description_lines: view.description_lines.clone(),
            size_min: view.size_min.clone(),
            size_max: view.size_max.clone(),
            schedule_class: view.class.clone(),
            item_code: view.item_code.clone(),
            left_align_size_min: false,
        }
    }
}

impl From<&ValveSummary> for SummaryBlock {
    fn from(view: &ValveSummary) -> Self {
        Self {
            type_lines: view.type_lines.to_vec(),
            description_lines: view.description_lines.clone(),
            size_min: view.size_min.clone(),
            size_max: view.size_max.clone(),
            schedule_class: view.design_code.clone(),
            item_code: view.item_code.clone(),
            left_align_size_min: false,
        }
    }
}

/// Fit `lines` into exactly `height` slots; overflow joins into the last slot
pub fn fit_lines(lines: &[String], height: usize) -> Vec<String> {
    if height == 0 {
        return Vec::new();
    }
    let mut fitted: Vec<String> = lines.iter().take(height).cloned().collect();
    if lines.len() > height {
        let tail: Vec<&str> = lines[height - 1..]
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        fitted[height - 1] = tail.join(OVERFLOW_SEPARATOR);
    }
    fitted.resize(height, String::new());
    fitted
}

/// Row cursor over a summary sheet
pub struct SummaryWriter<'a> {
    sheet: &'a mut Worksheet,
    row: u32,
    block_rows: u32,
    header_width: u32,
}

impl<'a> SummaryWriter<'a> {
    pub fn new(sheet: &'a mut Worksheet, start_row: u32, layout: &LayoutConfig) -> Self {
        Self {
            sheet,
            row: start_row,
            block_rows: layout.summary_block_rows,
            header_width: layout.header_unmerge_width,
        }
    }

    /// Next row to be written
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn skip_row(&mut self) {
        self.row += 1;
    }

    /// Bold upper-case header in column A after unmerging the row
    pub fn write_header(&mut self, text: &str) {
        self.sheet.unmerge_row(self.row, self.header_width);
        let at = CellRef::new(self.row, summary_columns::TYPE);
        self.sheet.set_text(at, text.to_uppercase());
        self.sheet.set_bold(at, true);
        debug!("Summary header '{}' at row {}", text, self.row);
        self.row += 1;
    }

    /// Write one item block and advance the cursor by the block height
    pub fn write_block(&mut self, block: &SummaryBlock) {
        let height = self.block_rows as usize;
        self.write_lines(summary_columns::TYPE, &fit_lines(&block.type_lines, height));
        self.write_lines(
            summary_columns::DESCRIPTION,
            &fit_lines(&block.description_lines, height),
        );

        for (column, value) in [
            (summary_columns::SIZE_MIN, &block.size_min),
            (summary_columns::SIZE_MAX, &block.size_max),
            (summary_columns::SCHEDULE_CLASS, &block.schedule_class),
            (summary_columns::CODE, &block.item_code),
        ] {
            self.write_lines(column, &fit_lines(std::slice::from_ref(value), height));
        }

        if block.left_align_size_min {
            self.sheet.set_alignment(
                CellRef::new(self.row, summary_columns::SIZE_MIN),
                HorizontalAlignment::Left,
            );
        }
        self.row += self.block_rows;
    }

    fn write_lines(&mut self, column: u32, lines: &[String]) {
        for (row, line) in (self.row..).zip(lines) {
            let at = CellRef::new(row, column);
            if line.trim().is_empty() {
                self.sheet.clear_contents(at);
            } else {
                self.sheet.set_text(at, line.trim());
            }
        }
    }

    /// Piping parts grouped by sorting code, each group under its title
    pub fn write_piping_parts(&mut self, records: &[&Record]) {
        let mut views: Vec<PipingPartSummary> =
            records.iter().map(|record| PipingPartSummary::extract(record)).collect();
        views.sort_by(|a, b| {
            a.group_rank()
                .cmp(&b.group_rank())
                .then_with(|| a.sort_code.to_lowercase().cmp(&b.sort_code.to_lowercase()))
        });

        let mut current_group = String::new();
        for view in &views {
            if !view.group_key.eq_ignore_ascii_case(&current_group) {
                current_group = view.group_key.clone();
                if let Some(sub_category) = SubCategory::from_group_code(&current_group) {
                    self.skip_row();
                    self.write_header(sub_category.title());
                    self.skip_row();
                }
            }
            self.write_block(&SummaryBlock::from(view));
        }
    }

    /// A titled section of blocks; nothing is written for an empty section
    pub fn write_section(&mut self, title: &str, blocks: &[SummaryBlock]) {
        if blocks.is_empty() {
            return;
        }
        self.write_header(title);
        for block in blocks {
            self.write_block(block);
        }
    }

    /// Set the print area to cover everything written and return the cursor
    pub fn finish(self) -> Result<u32> {
        let area = CellRange::parse(&format!("A1:{}{}", SUMMARY_PRINT_COLUMN, self.row))?;
        self.sheet.set_print_area(area);
        Ok(self.row)
    }
}

/// Fill a summary sheet from `start_row` and return the next free row.
///
/// Records are bucketed by category; piping parts come first (grouped), then
/// BOLTING, GASKET and VALVE sections in input order.
pub fn populate_summary(
    sheet: &mut Worksheet,
    start_row: u32,
    records: &[Record],
    layout: &LayoutConfig,
) -> Result<u32> {
    let mut piping_parts = Vec::new();
    let mut bolts = Vec::new();
    let mut gaskets = Vec::new();
    let mut valves = Vec::new();

    for record in records {
        match category_of(record) {
            Category::PipingPart => piping_parts.push(record),
            Category::Bolt => bolts.push(SummaryBlock::from(&BoltSummary::extract(record))),
            Category::Gasket => gaskets.push(SummaryBlock::from(&GasketSummary::extract(record))),
            Category::Valve => valves.push(SummaryBlock::from(&ValveSummary::extract(record))),
        }
    }

    info!(
        "Summary buckets: {} piping part(s), {} bolting, {} gasket(s), {} valve(s)",
        piping_parts.len(),
        bolts.len(),
        gaskets.len(),
        valves.len()
    );

    let mut writer = SummaryWriter::new(sheet, start_row, layout);
    writer.write_piping_parts(&piping_parts);
    writer.write_section("BOLTING", &bolts);
    writer.write_section("GASKET", &gaskets);
    writer.write_section("VALVE", &valves);
    writer.finish()
}

//! Placement of resolved record values into template worksheets
//!
//! Two writing strategies share one field-extraction layer:
//!
//! - **Per-item datasheets**: one cloned template sheet per record, values at
//!   fixed cells, section labels only when their value group is present, and a
//!   size table expanded from the record's size range.
//! - **Class summaries**: one sheet per pipe class, a row cursor and a fixed
//!   block of rows per item.
//!
//! # Architecture
//!
//! - [`fields`] - Field extraction for both strategies
//! - [`size_table`] - Size table start detection and row writing
//! - [`piping_part`], [`gasket`], [`valve`], [`bolt`] - Datasheet layouts
//! - [`summary`] - [`SummaryWriter`] and [`populate_summary`]
//!
//! Writes are additive: a blank value never overwrites template content.

pub mod bolt;
pub mod fields;
pub mod gasket;
pub mod piping_part;
pub mod size_table;
pub mod summary;
pub mod valve;

#[cfg(test)]
pub mod tests;

pub use size_table::{SizeTableLayout, detect_start_row, write_size_table};
pub use summary::{SummaryBlock, SummaryWriter, populate_summary};

use crate::app::models::{Category, Record};
use crate::app::services::grid::Worksheet;
use crate::config::LayoutConfig;
use crate::constants::DATASHEET_REVISION;
use crate::Result;
use tracing::debug;

/// Populate a datasheet for `record` using the layout of `category`
pub fn populate(
    sheet: &mut Worksheet,
    category: Category,
    record: &Record,
    layout: &LayoutConfig,
) -> Result<()> {
    debug!("Populating {} sheet '{}'", category, sheet.name());
    match category {
        Category::PipingPart => piping_part::populate_piping_part(sheet, record, layout),
        Category::Gasket => gasket::populate_gasket(sheet, record, layout),
        Category::Valve => valve::populate_valve(sheet, record, layout),
        Category::Bolt => bolt::populate_bolt(sheet, record),
    }
}

/// Write `value` at `address` only when it is not blank
pub fn set_if_present(sheet: &mut Worksheet, address: &str, value: &str) -> Result<()> {
    if has_text(value) {
        sheet.set_text_at(address, value)?;
    }
    Ok(())
}

pub(crate) fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Revision stamp shared by the datasheet layouts
pub(crate) fn write_footer(sheet: &mut Worksheet) -> Result<()> {
    sheet.set_text_at("D57", DATASHEET_REVISION)
}

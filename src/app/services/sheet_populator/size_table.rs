//! Size table rows below the "Size" header

use crate::app::services::grid::{CellRef, Worksheet};
use crate::app::services::size_range::{SizeLabel, SizeRange};
use crate::constants::SIZE_HEADER_TEXT;
use tracing::debug;

/// Column layout and defaults of one template's size table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTableLayout {
    /// First row the table may use
    pub min_row: u32,
    pub size_column: u32,
    pub quantity_column: u32,
    pub unit_price_column: u32,
    pub total_column: u32,
    pub default_quantity: f64,
    pub label: SizeLabel,
}

/// Row below the "Size" header, never above `min_row`
pub fn detect_start_row(sheet: &Worksheet, min_row: u32) -> u32 {
    let candidate = sheet
        .find_text(SIZE_HEADER_TEXT)
        .map(|header| header.row + 1)
        .unwrap_or(min_row);
    candidate.max(min_row)
}

/// Write one row per nominal size between `size_min` and `size_max`.
///
/// Returns the number of rows written; unknown or missing bounds write
/// nothing. Existing total cells (values or formulas) are left untouched.
pub fn write_size_table(
    sheet: &mut Worksheet,
    layout: &SizeTableLayout,
    size_min: &str,
    size_max: &str,
) -> usize {
    if size_min.trim().is_empty() || size_max.trim().is_empty() {
        return 0;
    }
    let Some(range) = SizeRange::from_tokens(size_min, size_max) else {
        debug!(
            "Size range '{}'..'{}' not in the size table, skipping rows",
            size_min, size_max
        );
        return 0;
    };

    let start = detect_start_row(sheet, layout.min_row);
    for (row, size) in (start..).zip(range.sizes()) {
        let price = CellRef::new(row, layout.unit_price_column);
        let quantity = CellRef::new(row, layout.quantity_column);
        let total = CellRef::new(row, layout.total_column);

        sheet.set_text(CellRef::new(row, layout.size_column), layout.label.label(size));
        sheet.set_number(quantity, layout.default_quantity);
        sheet.clear_contents(price);

        if sheet.is_blank(total) && !sheet.has_formula(total) {
            sheet.set_formula(total, format!("IFERROR({}*{},0)", price, quantity));
        }
    }

    debug!("Wrote {} size row(s) from row {}", range.len(), start);
    range.len()
}

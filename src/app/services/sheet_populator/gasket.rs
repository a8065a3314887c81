//! Gasket datasheet ("Template-G" layout)

use super::fields::GasketFields;
use super::size_table::{SizeTableLayout, write_size_table};
use super::{has_text, set_if_present, write_footer};
use crate::app::models::Record;
use crate::app::services::grid::Worksheet;
use crate::app::services::size_range::SizeLabel;
use crate::config::LayoutConfig;
use crate::constants::size_columns;
use crate::Result;

pub const TITLE: &str = "GASKET DATA SHEET";

/// Material rows 12..15, left column G and right column I
const MATERIAL_CELLS: [(&str, &str); 4] = [
    ("G12", "I12"),
    ("G13", "I13"),
    ("G14", "I14"),
    ("G15", "I15"),
];

pub fn size_table_layout(layout: &LayoutConfig) -> SizeTableLayout {
    SizeTableLayout {
        min_row: layout.size_table_min_row,
        size_column: size_columns::SIZE,
        quantity_column: size_columns::QUANTITY,
        unit_price_column: size_columns::UNIT_PRICE,
        total_column: size_columns::TOTAL,
        default_quantity: layout.default_order_quantity,
        label: SizeLabel::Metric,
    }
}

pub fn populate_gasket(sheet: &mut Worksheet, record: &Record, layout: &LayoutConfig) -> Result<()> {
    let fields = GasketFields::extract(record);

    set_if_present(sheet, "G7", &fields.code)?;
    set_if_present(sheet, "G9", &fields.type_text)?;

    for ((left_cell, right_cell), (left, right)) in MATERIAL_CELLS.iter().zip(&fields.materials) {
        set_if_present(sheet, left_cell, left)?;
        set_if_present(sheet, right_cell, right)?;
    }

    set_if_present(sheet, "G16", &fields.acc_to_standard)?;
    set_if_present(sheet, "G17", &fields.class)?;
    set_if_present(sheet, "G18", &fields.facing)?;
    set_if_present(sheet, "G19", &fields.thickness)?;

    if has_text(&fields.design_pressure) {
        sheet.set_text_at("G21", fields.design_pressure.as_str())?;
        sheet.set_text_at("D21", "DESIGN PRESSURE")?;
    }
    if has_text(&fields.design_temperature) {
        sheet.set_text_at("G22", fields.design_temperature.as_str())?;
        sheet.set_text_at("D22", "DESIGN TEMPERATURE")?;
    }

    sheet.set_text_at("D4", TITLE)?;
    write_footer(sheet)?;

    write_size_table(
        sheet,
        &size_table_layout(layout),
        &fields.size_min,
        &fields.size_max,
    );
    Ok(())
}

//! Valve datasheet ("Template-V" layout)

use super::fields::ValveFields;
use super::size_table::{SizeTableLayout, write_size_table};
use super::{has_text, set_if_present, write_footer};
use crate::app::models::Record;
use crate::app::services::grid::Worksheet;
use crate::app::services::size_range::SizeLabel;
use crate::config::LayoutConfig;
use crate::constants::size_columns;
use crate::Result;

pub const TITLE: &str = "VALVE DATA SHEET";

/// Design condition cells `(pressure, temperature)` for sets 1..3
const DESIGN_CONDITION_CELLS: [(&str, &str); 3] = [("F14", "F15"), ("G14", "G15"), ("H14", "H15")];

/// Material block columns C1, C2, C3
const DESCRIPTION_COLUMNS: [&str; 3] = ["F", "H", "I"];
const DESCRIPTION_FIRST_ROW: u32 = 19;

/// Valve size tables take sizes in DN or inch and always write inch labels
pub fn size_table_layout(layout: &LayoutConfig) -> SizeTableLayout {
    SizeTableLayout {
        min_row: layout.valve_size_table_min_row,
        size_column: size_columns::SIZE,
        quantity_column: size_columns::VALVE_QUANTITY,
        unit_price_column: size_columns::VALVE_UNIT_PRICE,
        total_column: size_columns::TOTAL,
        default_quantity: layout.default_order_quantity,
        label: SizeLabel::Inch,
    }
}

pub fn populate_valve(sheet: &mut Worksheet, record: &Record, layout: &LayoutConfig) -> Result<()> {
    let fields = ValveFields::extract(record);

    set_if_present(sheet, "F7", &fields.code)?;
    set_if_present(sheet, "F9", &fields.type_text)?;
    set_if_present(sheet, "F11", &fields.medium)?;
    set_if_present(sheet, "F12", &fields.corrosive_component)?;

    for ((pressure_cell, temperature_cell), (pressure, temperature)) in
        DESIGN_CONDITION_CELLS.iter().zip(&fields.design_conditions)
    {
        set_if_present(sheet, pressure_cell, pressure)?;
        set_if_present(sheet, temperature_cell, temperature)?;
    }

    set_if_present(sheet, "F17", &fields.design_code)?;
    if let Some(label) = fields.rating_label() {
        sheet.set_text_at("D17", label)?;
    }

    for (row, line) in (DESCRIPTION_FIRST_ROW..).zip(&fields.descriptions) {
        for (column, value) in DESCRIPTION_COLUMNS.iter().zip(line) {
            set_if_present(sheet, &format!("{}{}", column, row), value)?;
        }
    }

    if has_text(&fields.end_connection) {
        sheet.set_text_at("D24", "PIPING CONNECTION")?;
        sheet.set_text_at("F24", fields.end_connection.as_str())?;
    }
    if has_text(&fields.operation) {
        sheet.set_text_at("D25", "OPERATION")?;
        sheet.set_text_at("F25", fields.operation.as_str())?;
    }

    let [spec_1, spec_2] = &fields.additional_specifications;
    set_if_present(sheet, "F26", spec_1)?;
    set_if_present(sheet, "F27", spec_2)?;
    set_if_present(sheet, "F29", &fields.piping_class)?;

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

//! Piping part datasheet ("Template-PP" layout)

use super::fields::PipingPartFields;
use super::size_table::{SizeTableLayout, write_size_table};
use super::{has_text, set_if_present, write_footer};
use crate::app::models::Record;
use crate::app::services::grid::{CellRef, Worksheet};
use crate::app::services::size_range::SizeLabel;
use crate::config::LayoutConfig;
use crate::constants::size_columns;
use crate::Result;

pub const TITLE: &str = "FITTING SPECIFICATION";

pub fn size_table_layout(layout: &LayoutConfig) -> SizeTableLayout {
    SizeTableLayout {
        min_row: layout.size_table_min_row,
        size_column: size_columns::SIZE,
        quantity_column: size_columns::QUANTITY,
        unit_price_column: size_columns::UNIT_PRICE,
        total_column: size_columns::TOTAL,
        default_quantity: layout.default_order_quantity,
        label: SizeLabel::Inch,
    }
}

pub fn populate_piping_part(
    sheet: &mut Worksheet,
    record: &Record,
    layout: &LayoutConfig,
) -> Result<()> {
    let fields = PipingPartFields::extract(record);

    set_if_present(sheet, "G7", &fields.code)?;
    set_if_present(sheet, "G9", &fields.type_text)?;

    if has_text(&fields.seam_weld) {
        sheet.set_text_at("G10", fields.seam_weld.as_str())?;
        sheet.set_text_at("D10", "SEAMLESS/WELDED")?;
    }

    set_if_present(sheet, "G12", &fields.material)?;
    set_if_present(sheet, "G13", &fields.acc_to_standard)?;

    if has_text(&fields.schedule) {
        sheet.set_text_at("G14", fields.schedule.as_str())?;
        sheet.set_text_at("D14", "SCHEDULE")?;
    }

    if has_text(&fields.class_or_rating) {
        sheet.set_text_at("G15", fields.class_or_rating.as_str())?;
        let label = if has_text(&fields.rating) { "RATING" } else { "CLASS" };
        sheet.set_text_at("D15", label)?;
    }

    if has_text(&fields.length) {
        sheet.set_text_at("G16", fields.length.as_str())?;
        sheet.set_text_at("D16", "LENGTH")?;
    }

    let [connection_1, connection_2] = &fields.piping_connections;
    if has_text(connection_1) || has_text(connection_2) {
        sheet.set_text_at("D18", "PIPING CONNECTIONS")?;
        set_if_present(sheet, "G18", connection_1)?;
        set_if_present(sheet, "G19", connection_2)?;
    }

    let [spec_1, spec_2] = &fields.additional_specifications;
    if has_text(spec_1) || has_text(spec_2) {
        sheet.set_text_at("D20", "ADDITIONAL SPECIFICATION")?;
        set_if_present(sheet, "G20", spec_1)?;
        set_if_present(sheet, "G21", spec_2)?;
    }

    // Colour marking shares rows 21..22 with the second additional specification
    let [mark_1, mark_2] = &fields.colour_marks;
    if has_text(mark_1) || has_text(mark_2) {
        sheet.set_text_at("D21", "COLOUR MARKING")?;
        sheet.set_text_at("F21", "1ST")?;
        sheet.set_text_at("F22", "2ND")?;
        set_if_present(sheet, "G21", mark_1)?;
        set_if_present(sheet, "G22", mark_2)?;
        sheet.set_text_at("D23", "*along entire length of item")?;
    }

    set_if_present(sheet, "G24", &fields.piping_class)?;

    sheet.set_text_at("D4", TITLE)?;
    let heading = CellRef::parse("D5")?;
    sheet.set_text(heading, fields.sub_category.title());
    sheet.set_bold(heading, true);
    write_footer(sheet)?;

    write_size_table(
        sheet,
        &size_table_layout(layout),
        &fields.size_min,
        &fields.size_max,
    );
    Ok(())
}

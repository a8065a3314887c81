//! Bolt and nut datasheet ("Template-B" layout)

use super::fields::BoltFields;
use super::set_if_present;
use crate::app::models::Record;
use crate::app::services::grid::Worksheet;
use crate::Result;
use tracing::trace;

pub fn populate_bolt(sheet: &mut Worksheet, record: &Record) -> Result<()> {
    let fields = BoltFields::extract(record);

    let slots = [
        ("G7", "Code", &fields.code),
        ("G9", "Type", &fields.type_text),
        ("G11", "MaterialBolts", &fields.bolt_material),
        ("G12", "MaterialNuts", &fields.nut_material),
        ("G13", "Coating", &fields.coating),
        ("G15", "AccToStandard", &fields.acc_to_standard),
        ("G20", "Remarks", &fields.remarks),
    ];

    for (address, _, value) in &slots {
        set_if_present(sheet, address, value)?;
    }

    // Named cells are optional in bolt templates
    for (_, name, value) in &slots {
        if !value.trim().is_empty() && !sheet.set_by_name(name, value.as_str()) {
            trace!("Bolt template has no defined name '{}'", name);
        }
    }
    Ok(())
}

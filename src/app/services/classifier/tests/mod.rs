//! Tests for record classification

use crate::app::models::Record;


/// Create a record from attribute pairs
pub fn record_with(name: &str, attributes: &[(&str, &str)]) -> Record {
    let mut record = Record::new(name);
    for (key, value) in attributes {
        record.attributes.insert(*key, *value);
    }
    record
}

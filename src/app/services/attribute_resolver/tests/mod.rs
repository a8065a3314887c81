//! Tests for attribute resolution

use crate::app::models::Record;

pub mod rules_tests;

/// Create a record with attributes in the given order
pub fn create_test_record(name: &str, attributes: &[(&str, &str)]) -> Record {
    attributes
        .iter()
        .fold(Record::new(name), |record, (key, value)| {
            record.with_attribute(*key, *value)
        })
}

//! Tests for rule lists

use super::*;
use crate::app::services::attribute_resolver::{
    FieldRule, KeyMatching, first_non_empty_resolved, first_non_empty_resolved_with,
};

const CODE_RULES: &[FieldRule] = &[
    FieldRule::exact(&["Comment"]),
    FieldRule::exact(&["Device designation"]),
    FieldRule::exact(&["Code"]),
];

const PRESSURE_RULES: &[FieldRule] = &[
    FieldRule::exact(&["JLE Design pressure min"]),
    FieldRule::contains(&["Design pressure min"]),
];

#[test]
fn test_rules_tried_in_order() {
    let record = create_test_record("P-1", &[("Code", "C-1"), ("Device designation", "D-1")]);
    assert_eq!(first_non_empty_resolved(&record, CODE_RULES), "D-1");
}

#[test]
fn test_exact_rule_ignores_partial_keys() {
    let record = create_test_record("P-1", &[("Comment text", "X")]);
    assert_eq!(first_non_empty_resolved(&record, CODE_RULES), "");
}

#[test]
fn test_contains_rule_used_after_exact_rule() {
    let record = create_test_record("V-1", &[("Design pressure min (barg)", "-0.5")]);
    assert_eq!(first_non_empty_resolved(&record, PRESSURE_RULES), "-0.5");
}

#[test]
fn test_fuzzy_rule_with_compact_matching() {
    const RING_RULES: &[FieldRule] = &[FieldRule::fuzzy(&["Inside / Outside Ring"])];
    let record = create_test_record("G-1", &[("Inside/Outside Ring material", "SS316")]);

    assert_eq!(first_non_empty_resolved(&record, RING_RULES), "");
    assert_eq!(
        first_non_empty_resolved_with(&record, RING_RULES, KeyMatching::Compact),
        "SS316"
    );
}

//! Ordered candidate sets for field resolution
//!
//! A logical field is a static list of [`FieldRule`]s. The first rule that
//! produces a non-blank value wins, which expresses "prefer A, else B, else C"
//! policies as data instead of nested conditionals.

use super::resolver::{KeyMatching, resolve_exact, resolve_fuzzy, resolve_with};
use crate::app::models::Record;

/// Which lookup passes a rule runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Exact key match only
    Exact,
    /// Key-contains match only
    Contains,
    /// Exact match, then key-contains match
    Fuzzy,
}

/// One candidate set for a logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub keys: &'static [&'static str],
    pub lookup: Lookup,
}

impl FieldRule {
    pub const fn exact(keys: &'static [&'static str]) -> Self {
        Self {
            keys,
            lookup: Lookup::Exact,
        }
    }

    pub const fn contains(keys: &'static [&'static str]) -> Self {
        Self {
            keys,
            lookup: Lookup::Contains,
        }
    }

    pub const fn fuzzy(keys: &'static [&'static str]) -> Self {
        Self {
            keys,
            lookup: Lookup::Fuzzy,
        }
    }

    /// Resolve this rule against a record
    pub fn resolve(&self, record: &Record, matching: KeyMatching) -> String {
        match self.lookup {
            Lookup::Exact => resolve_exact(record, self.keys),
            Lookup::Contains => resolve_fuzzy(record, self.keys, matching),
            Lookup::Fuzzy => resolve_with(record, self.keys, matching),
        }
    }
}

/// First non-blank value across ordered rules, case-insensitive matching
pub fn first_non_empty_resolved(record: &Record, rules: &[FieldRule]) -> String {
    first_non_empty_resolved_with(record, rules, KeyMatching::CaseInsensitive)
}

/// First non-blank value across ordered rules with a chosen matching mode
pub fn first_non_empty_resolved_with(
    record: &Record,
    rules: &[FieldRule],
    matching: KeyMatching,
) -> String {
    rules
        .iter()
        .map(|rule| rule.resolve(record, matching))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
}

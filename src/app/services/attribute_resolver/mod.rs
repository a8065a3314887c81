//! Attribute resolution over loosely named catalog records
//!
//! Catalog records describe the same concept under many spellings
//! ("Acc to Standard", "Material Standard", "ACC. TO STANDARD"). This module
//! resolves a logical field against a record by trying candidate keys in
//! priority order.
//!
//! # Architecture
//!
//! - [`resolver`] - Exact and fuzzy key lookups and the two-pass [`resolve`]
//! - [`rules`] - Static [`FieldRule`] lists and [`first_non_empty_resolved`]
//!
//! # Resolution Passes
//!
//! 1. **Exact**: each candidate key in order, compared without case. Blank
//!    stored values are skipped.
//! 2. **Fuzzy**: only when the exact pass found nothing. Each candidate key in
//!    order, the first attribute (in record order) whose key contains the
//!    candidate and whose value is not blank.
//!
//! An unresolved field is an empty string, never an error.

pub mod resolver;
pub mod rules;

#[cfg(test)]
pub mod tests;

pub use resolver::{
    KeyMatching, first_non_empty, resolve, resolve_exact, resolve_fuzzy, resolve_with,
};
pub use rules::{FieldRule, Lookup, first_non_empty_resolved, first_non_empty_resolved_with};

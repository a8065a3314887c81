//! Nominal size table, unit conversion and range expansion
//!
//! Sizes are held in one canonical ordered table (1/2" to 36"), each entry
//! carrying an inch token ("1 1/2") and a DN token ("DN40"). Size ranges on
//! records are resolved against this table and expanded into one row per
//! nominal size.
//!
//! # Architecture
//!
//! - [`table`] - The canonical [`NominalSize`] table, token normalization and
//!   inch/DN conversion
//! - [`range`] - [`SizeRange`] resolution and [`expand`]
//!
//! Unknown tokens are never an error: conversions pass them through and
//! expansion yields no rows.

pub mod range;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use range::{SizeLabel, SizeRange, expand};
pub use table::{
    NominalSize, canonical_sizes, index_of, normalize_token, to_inch_token, to_metric_token,
};

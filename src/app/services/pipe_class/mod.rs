//! Pipe class recognition, ordering and discovery
//!
//! A pipe class code looks like `150JX00`: a pressure rating, the letter `J`,
//! a one- or two-letter series and a two-digit index. Codes with a rating of
//! 150 or more are ASME classes; lower ratings are DIN classes.
//!
//! # Architecture
//!
//! - [`codes`] - Code recognition, rating extraction, natural ordering and
//!   rating partitions
//! - [`membership`] - Class tokens on records and catalog-wide discovery

pub mod codes;
pub mod membership;

#[cfg(test)]
pub mod tests;

pub use codes::{
    ClassGroups, extract_rating_token, group_by_rating, is_class_code, is_high_rating,
    natural_cmp, natural_sort, partition,
};
pub use membership::{belongs_to_class, class_records, class_tokens, discover_classes};

//! Catalog document loading and traversal
//!
//! The catalog is a tree of named nodes with flat attribute maps. Items
//! live under `JLE → Materials → {Bolts & Nuts, Pipe & Fittings, Valves}`;
//! folder names are compared with case and punctuation ignored.
//!
//! # Architecture
//!
//! - [`document`] - [`Catalog`] loading and folder lookup
//! - [`traversal`] - Depth-first leaf collection and node walks
//!
//! When the materials folder is missing, leaf collection falls back to every
//! top-level folder and node walks cover the whole tree.

pub mod document;
pub mod traversal;

#[cfg(test)]
pub mod tests;

pub use document::{Catalog, child, normalize_folder_key};

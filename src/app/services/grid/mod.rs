//! In-memory spreadsheet grid and workbook persistence
//!
//! The generators write into template workbooks through this module. A
//! workbook is a list of worksheets; a worksheet is a sparse map of cells with
//! merged ranges, per-cell style, a print area and sheet-scoped defined names.
//!
//! # Architecture
//!
//! - [`cell`] - [`CellRef`] (A1 addressing), [`CellRange`], [`CellValue`],
//!   [`Cell`] and [`CellStyle`]
//! - [`worksheet`] - [`Worksheet`] reads, writes, clears, merges and label search
//! - [`workbook`] - [`Workbook`] sheet lookup, cloning and deletion
//! - [`store`] - The [`WorkbookStore`] seam and the JSON-backed store
//!
//! Rows and columns are 1-based throughout, matching spreadsheet addressing.

pub mod cell;
pub mod store;
pub mod workbook;
pub mod worksheet;

#[cfg(test)]
pub mod tests;

pub use cell::{Cell, CellRange, CellRef, CellStyle, CellValue, HorizontalAlignment};
pub use store::{JsonWorkbookStore, WorkbookStore};
pub use workbook::{Workbook, WorkbookProperties};
pub use worksheet::Worksheet;

//! Command implementations for the datasheet generator CLI
//!
//! Each subcommand lives in its own module and prints the run's status
//! message. Generation runs report skipped items and failed classes in that
//! message rather than as errors.

pub mod classes;
pub mod datasheets;
pub mod items;
pub mod shared;
pub mod summary;

use crate::cli::args::Commands;
use anyhow::Result;

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `items`: catalog listing with categories
/// - `datasheets`: per-category datasheet workbooks
/// - `classes`: pipe class discovery and rating groups
/// - `summary`: per-class summary workbooks
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Items(args) => items::run_items(args),
        Commands::Datasheets(args) => datasheets::run_datasheets(args),
        Commands::Classes(args) => classes::run_classes(args),
        Commands::Summary(args) => summary::run_summary(args),
    }
}

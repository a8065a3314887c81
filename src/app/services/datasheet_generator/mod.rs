//! Workbook generation runs
//!
//! Both generators work on copies: templates are opened through a
//! [`WorkbookStore`], filled in memory and saved under the output directory.
//! Runs never return an error; prerequisites that are missing and per-item
//! failures end up in the run report and its status message.
//!
//! # Architecture
//!
//! - [`datasheets`] - [`DatasheetGenerator`]: one workbook per category, one
//!   sheet per selected item
//! - [`summaries`] - [`ClassSummaryGenerator`]: one workbook per pipe class
//! - [`naming`] - Sheet and file name sanitizing
//!
//! [`WorkbookStore`]: crate::app::services::grid::WorkbookStore

pub mod datasheets;
pub mod naming;
pub mod summaries;

#[cfg(test)]
pub mod tests;

pub use datasheets::{DatasheetGenerator, GenerationReport, SkippedItem};
pub use naming::{sanitize_file_name, sanitize_sheet_name, sheet_name_seed};
pub use summaries::{ClassSummaryGenerator, SummaryReport};

use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Progress bar for a generation run
pub(crate) fn progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

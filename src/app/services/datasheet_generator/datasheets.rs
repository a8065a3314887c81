//! Per-item datasheet workbooks

use super::naming::{sanitize_sheet_name, sheet_name_seed};
use super::progress_bar;
use crate::app::models::{Category, Record};
use crate::app::services::classifier::category_of;
use crate::app::services::grid::{Workbook, WorkbookStore};
use crate::app::services::sheet_populator::populate;
use crate::config::{Config, LayoutConfig, find_template};
use crate::constants::{BOLT_OUTPUT, GASKET_OUTPUT, PIPING_PART_OUTPUT, VALVE_OUTPUT};
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// An item that produced no datasheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    /// Sheet name the item would have received
    pub name: String,
    pub reason: String,
}

/// Outcome of a datasheet run
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Datasheets written
    pub created: usize,
    pub skipped: Vec<SkippedItem>,
    /// Workbooks saved
    pub outputs: Vec<PathBuf>,
    /// Workbooks that failed to save, with the error text
    pub save_failures: Vec<String>,
    pub duration: Duration,
    /// Status text for the user
    pub message: String,
}

impl GenerationReport {
    fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// A category workbook opened from its template
struct OutputBook {
    category: Category,
    workbook: Workbook,
    /// Sheet cloned for every item
    template_index: usize,
    /// Configured template sheet name, removed before saving
    template_sheet: String,
    output: PathBuf,
}

/// Generates one workbook per category with one sheet per selected item
pub struct DatasheetGenerator<'a, S: WorkbookStore> {
    config: &'a Config,
    store: &'a S,
    show_progress: bool,
}

impl<'a, S: WorkbookStore> DatasheetGenerator<'a, S> {
    pub fn new(config: &'a Config, store: &'a S) -> Self {
        Self {
            config,
            store,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Generate datasheets for `records` in selection order
    ///
    /// Never fails: missing prerequisites and per-item problems are reported
    /// in the returned [`GenerationReport`].
    pub fn generate(&self, records: &[Record]) -> GenerationReport {
        let start_time = Instant::now();

        if records.is_empty() {
            return GenerationReport::with_message("No items selected.");
        }

        let templates_dir = self.config.templates_dir();
        if !templates_dir.is_dir() {
            warn!("{}", Error::configuration_missing(templates_dir.display().to_string()));
            return GenerationReport::with_message(format!(
                "Templates folder not found at:\n{}",
                templates_dir.display()
            ));
        }

        let output_dir = match self.config.ensure_output_directory() {
            Ok(dir) => dir,
            Err(e) => {
                error!("{}", e);
                return GenerationReport::with_message(format!("{}", e));
            }
        };

        let mut books: Vec<OutputBook> = Category::ALL
            .iter()
            .filter_map(|category| self.open_book(*category))
            .collect();
        info!(
            "Generating {} datasheet(s) with {} template workbook(s)",
            records.len(),
            books.len()
        );

        let mut report = GenerationReport::default();
        let progress = self
            .show_progress
            .then(|| progress_bar(records.len() as u64, "Generating datasheets"));

        for record in records {
            let sheet_name =
                sanitize_sheet_name(&sheet_name_seed(record), self.config.layout.sheet_name_max_len);
            if let Some(pb) = &progress {
                pb.set_message(sheet_name.clone());
            }

            match self.generate_item(&mut books, record, &sheet_name) {
                Ok(()) => report.created += 1,
                Err(reason) => {
                    warn!("Skipped '{}': {}", sheet_name, reason);
                    report.skipped.push(SkippedItem {
                        name: sheet_name,
                        reason,
                    });
                }
            }

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message("Datasheets complete");
        }

        for mut book in books {
            if book.workbook.sheet_count() > 1 {
                book.workbook.remove_sheet(&book.template_sheet);
            }
            match self.store.save(&mut book.workbook, &book.output) {
                Ok(()) => report.outputs.push(book.output),
                Err(e) => {
                    error!("Failed to save {} workbook: {}", book.category, e);
                    report
                        .save_failures
                        .push(format!("{}: {}", book.output.display(), e));
                }
            }
        }

        report.duration = start_time.elapsed();
        report.message = build_message(&report, &output_dir);
        info!(
            "Datasheets: {} created, {} skipped in {:.2}s",
            report.created,
            report.skipped.len(),
            report.duration.as_secs_f64()
        );
        report
    }

    /// Open the template workbook for `category`, if one exists and has a sheet
    fn open_book(&self, category: Category) -> Option<OutputBook> {
        let templates = &self.config.templates;
        let (base_name, template_sheet, output_name) = match category {
            Category::PipingPart => (
                &templates.piping_part,
                &templates.piping_part_sheet,
                PIPING_PART_OUTPUT,
            ),
            Category::Gasket => (&templates.gasket, &templates.gasket_sheet, GASKET_OUTPUT),
            Category::Valve => (&templates.valve, &templates.valve_sheet, VALVE_OUTPUT),
            Category::Bolt => (&templates.bolt, &templates.bolt_sheet, BOLT_OUTPUT),
        };

        let templates_dir = self.config.templates_dir();
        let Some(path) = find_template(&templates_dir, base_name, self.store.extension()) else {
            debug!("No {} template '{}' in {}", category, base_name, templates_dir.display());
            return None;
        };

        let workbook = match self.store.open(&path) {
            Ok(workbook) => workbook,
            Err(e) => {
                warn!("Ignoring {} template: {}", category, e);
                return None;
            }
        };

        let template_index = match workbook.sheet_index(template_sheet) {
            Some(index) => index,
            None if workbook.sheet_count() > 0 => {
                debug!(
                    "Template sheet '{}' not found in {}; using the first sheet",
                    template_sheet,
                    path.display()
                );
                0
            }
            None => {
                warn!("{}", Error::template_sheet_missing(path.display().to_string()));
                return None;
            }
        };

        let output = self
            .config
            .output_dir()
            .join(format!("{}.{}", output_name, self.store.extension()));

        Some(OutputBook {
            category,
            workbook,
            template_index,
            template_sheet: template_sheet.clone(),
            output,
        })
    }

    /// Clone and fill one sheet; the error is the skip reason
    fn generate_item(
        &self,
        books: &mut [OutputBook],
        record: &Record,
        sheet_name: &str,
    ) -> std::result::Result<(), String> {
        let category = category_of(record);
        let book = route(books, category).ok_or_else(|| match category {
            Category::Valve => "missing valve template".to_string(),
            Category::PipingPart => "missing piping part template".to_string(),
            other => format!("missing {} and piping part templates", other.label().to_lowercase()),
        })?;

        let layout_category = book.category;
        debug!(
            "Routing '{}' ({}) to the {} workbook",
            sheet_name, category, layout_category
        );

        fill_sheet(book, layout_category, record, sheet_name, &self.config.layout)
            .map_err(|e| e.to_string())
    }
}

/// Workbook for a category: valves need their own, gaskets and bolts fall
/// back to the piping part workbook
fn route(books: &mut [OutputBook], category: Category) -> Option<&mut OutputBook> {
    let own = books.iter().position(|book| book.category == category);
    let index = match (own, category) {
        (Some(index), _) => Some(index),
        (None, Category::Valve) => None,
        (None, _) => books
            .iter()
            .position(|book| book.category == Category::PipingPart),
    };
    index.map(move |index| &mut books[index])
}

fn fill_sheet(
    book: &mut OutputBook,
    layout_category: Category,
    record: &Record,
    sheet_name: &str,
    layout: &LayoutConfig,
) -> Result<()> {
    let index = book
        .workbook
        .copy_sheet(book.template_index, sheet_name, layout.sheet_name_max_len)?;
    let sheet = book
        .workbook
        .sheet_at_mut(index)
        .ok_or_else(|| Error::sheet_not_found(sheet_name))?;

    if let Err(e) = populate(sheet, layout_category, record, layout) {
        book.workbook.sheets.remove(index);
        return Err(Error::item_generation(sheet_name, e.to_string()));
    }
    Ok(())
}

fn build_message(report: &GenerationReport, output_dir: &Path) -> String {
    let mut message = if report.created > 0 {
        format!(
            "Generated {} datasheet(s).\nOutput: {}",
            report.created,
            output_dir.display()
        )
    } else {
        "No datasheets generated.".to_string()
    };

    if !report.skipped.is_empty() {
        let lines: Vec<String> = report
            .skipped
            .iter()
            .map(|item| format!(" - {} ({})", item.name, item.reason))
            .collect();
        message.push_str("\n\nItems skipped:\n");
        message.push_str(&lines.join("\n"));
    }

    if !report.save_failures.is_empty() {
        message.push_str("\n\nWorkbooks not saved:\n - ");
        message.push_str(&report.save_failures.join("\n - "));
    }
    message
}

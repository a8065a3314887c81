//! Pipe class summary workbooks

use super::naming::sanitize_file_name;
use super::progress_bar;
use crate::app::services::catalog::Catalog;
use crate::app::services::grid::WorkbookStore;
use crate::app::services::pipe_class::class_records;
use crate::app::services::sheet_populator::populate_summary;
use crate::config::{Config, find_template};
use crate::constants::{SUMMARY_SHEET_NAME, SUMMARY_TITLE_CELL, SUMMARY_TITLE_PREFIX};
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Outcome of a class summary run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryReport {
    pub ok: usize,
    pub failed: usize,
    /// Workbooks written, one per successful class
    pub outputs: Vec<PathBuf>,
    pub duration: Duration,
    /// Status text for the user
    pub message: String,
}

/// Generates one summary workbook per pipe class
pub struct ClassSummaryGenerator<'a, S: WorkbookStore> {
    config: &'a Config,
    store: &'a S,
    show_progress: bool,
}

impl<'a, S: WorkbookStore> ClassSummaryGenerator<'a, S> {
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

    /// Generate a summary workbook for each class in `classes`
    ///
    /// A failing class is logged and counted; the remaining classes are still
    /// generated.
    pub fn generate<C: AsRef<str>>(&self, catalog: &Catalog, classes: &[C]) -> SummaryReport {
        let start_time = Instant::now();

        let classes: Vec<&str> = classes
            .iter()
            .map(|class| class.as_ref().trim())
            .filter(|class| !class.is_empty())
            .collect();
        if classes.is_empty() {
            return SummaryReport {
                message: "No items selected.".to_string(),
                ..SummaryReport::default()
            };
        }

        let templates_dir = self.config.templates_dir();
        let template_name = &self.config.templates.pipe_class;

        let Some(template) = find_template(&templates_dir, template_name, self.store.extension())
        else {
            let expected =
                templates_dir.join(format!("{}.{}", template_name, self.store.extension()));
            warn!("{}", Error::configuration_missing(expected.display().to_string()));
            return SummaryReport {
                message: format!("Template not found: {}", expected.display()),
                ..SummaryReport::default()
            };
        };

        let output_dir = match self.config.ensure_output_directory() {
            Ok(dir) => dir,
            Err(e) => {
                error!("{}", e);
                return SummaryReport {
                    message: e.to_string(),
                    ..SummaryReport::default()
                };
            }
        };

        info!("Generating {} pipe class summary(ies)", classes.len());

        let mut report = SummaryReport::default();
        let progress = self
            .show_progress
            .then(|| progress_bar(classes.len() as u64, "Generating class summaries"));

        for class in classes {
            if let Some(pb) = &progress {
                pb.set_message(class.to_string());
            }

            match self.generate_class(catalog, class, &template, &output_dir) {
                Ok(path) => {
                    report.ok += 1;
                    report.outputs.push(path);
                }
                Err(e) => {
                    error!("Summary for pipe class {} failed: {}", class, e);
                    report.failed += 1;
                }
            }

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message("Class summaries complete");
        }

        report.duration = start_time.elapsed();
        report.message = format!(
            "Pipe class summaries generated: OK={}, Failed={}. Output: {}",
            report.ok,
            report.failed,
            output_dir.display()
        );
        info!("{}", report.message);
        report
    }

    fn generate_class(
        &self,
        catalog: &Catalog,
        class: &str,
        template: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let mut workbook = self.store.open(template)?;
        let sheet = workbook
            .sheet_at_mut(0)
            .ok_or_else(|| Error::template_sheet_missing(template.display().to_string()))?;

        sheet.rename(SUMMARY_SHEET_NAME);
        sheet.set_text_at(SUMMARY_TITLE_CELL, format!("{}{}", SUMMARY_TITLE_PREFIX, class))?;

        let records = class_records(catalog, &self.config.catalog, class);
        let layout = &self.config.layout;
        let last_row = populate_summary(sheet, layout.summary_start_row, &records, layout)
            .map_err(|e| Error::item_generation(class, e.to_string()))?;
        debug!("Pipe class {} summary ends at row {}", class, last_row);

        let path = output_dir.join(format!(
            "{}.{}",
            sanitize_file_name(class),
            self.store.extension()
        ));
        self.store.save(&mut workbook, &path)?;
        Ok(path)
    }
}

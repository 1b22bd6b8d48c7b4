// src/export/logic.rs

use crate::core::calculator::MonthOrder;
use crate::core::logic::{Core, ReportFilter};
use crate::core::period::Period;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{entries_from_report, months_from_report};
use crate::models::Snapshot;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// What to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// One row per entry with its rate and value.
    Entries,
    /// One row per month with its total.
    Months,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export priced entries or month totals.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression (`YYYY`,
    ///   `YYYY-MM`, `YYYY-MM-DD`, or `start:end` in the same format)
    ///
    /// Returns the number of rows written (0 when nothing matched, in which
    /// case no file is created).
    pub fn export(
        snapshot: &Snapshot,
        format: ExportFormat,
        kind: ExportKind,
        file: &str,
        range: Option<&str>,
        order: MonthOrder,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let filter = ReportFilter {
            period: Period::parse_opt(range)?,
            work_type_id: None,
        };
        let report = Core::build_report(snapshot, &filter, order);

        if report.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let written = match kind {
            ExportKind::Entries => {
                let rows = entries_from_report(&report);
                match format {
                    ExportFormat::Csv => export_csv(&rows, path)?,
                    ExportFormat::Json => export_json(&rows, path)?,
                }
                rows.len()
            }
            ExportKind::Months => {
                let rows = months_from_report(&report);
                match format {
                    ExportFormat::Csv => export_csv(&rows, path)?,
                    ExportFormat::Json => export_json(&rows, path)?,
                }
                rows.len()
            }
        };

        debug!(format = format.as_str(), rows = written, path = %path.display(), "export written");
        Ok(written)
    }
}

// src/export/model.rs

use crate::core::logic::{EntryRow, Report};
use serde::Serialize;

/// Flat row for entry exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    pub month: String,
    pub work_type: String,
    pub rate_type: String,
    pub hours: f64,
    pub start_time: String,
    pub end_time: String,
    pub rate: Option<f64>,
    pub value: f64,
}

/// Flat row for month summary exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MonthExport {
    pub month: String,
    pub label: String,
    pub entries: usize,
    pub total: f64,
}

impl From<&EntryRow<'_>> for EntryExport {
    fn from(row: &EntryRow<'_>) -> Self {
        let e = row.entry;
        Self {
            id: e.id.clone(),
            date: e.date_str(),
            month: e.month_key().to_string(),
            work_type: e.work_type.name.clone(),
            rate_type: e.rate_type().as_str().to_string(),
            hours: e.hours,
            start_time: e
                .start_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            end_time: e
                .end_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            rate: row.rate,
            value: row.value,
        }
    }
}

pub(crate) fn entries_from_report(report: &Report<'_>) -> Vec<EntryExport> {
    report
        .months
        .iter()
        .flat_map(|m| m.rows.iter().map(EntryExport::from))
        .collect()
}

pub(crate) fn months_from_report(report: &Report<'_>) -> Vec<MonthExport> {
    report
        .months
        .iter()
        .map(|m| MonthExport {
            month: m.key.to_string(),
            label: m.key.label(),
            entries: m.rows.len(),
            total: m.total,
        })
        .collect()
}

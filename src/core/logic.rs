//! Report assembly around the pure calculator.
//!
//! Tracing lives here: the calculator functions stay silent and this layer
//! records what was computed.

use crate::core::calculator::{
    MonthOrder, compute_entry_value, effective_rate, group_by_month, month_total,
};
use crate::core::period::Period;
use crate::models::{MonthKey, RateTable, Snapshot, TimeEntry};
use serde::Serialize;
use tracing::{debug, debug_span};

/// One table row: the entry plus what it is worth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRow<'a> {
    pub entry: &'a TimeEntry,
    pub rate: Option<f64>,
    pub value: f64,
}

/// Rows of one month and their total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport<'a> {
    pub key: MonthKey,
    pub rows: Vec<EntryRow<'a>>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    pub months: Vec<MonthReport<'a>>,
    pub grand_total: f64,
}

impl Report<'_> {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.months.iter().map(|m| m.rows.len()).sum()
    }
}

/// Optional restrictions applied before grouping.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub period: Option<Period>,
    pub work_type_id: Option<String>,
}

impl ReportFilter {
    pub fn accepts(&self, entry: &TimeEntry) -> bool {
        if let Some(p) = &self.period
            && !p.contains(entry.work_date)
        {
            return false;
        }
        match &self.work_type_id {
            Some(id) => &entry.work_type_id == id,
            None => true,
        }
    }
}

pub struct Core;

impl Core {
    /// Group the snapshot's entries by month and price every row.
    pub fn build_report<'a>(
        snapshot: &'a Snapshot,
        filter: &ReportFilter,
        order: MonthOrder,
    ) -> Report<'a> {
        let span = debug_span!("build_report", entries = snapshot.entries.len());
        let _guard = span.enter();

        let selected: Vec<&TimeEntry> = snapshot
            .entries
            .iter()
            .filter(|e| filter.accepts(e))
            .collect();

        debug!(selected = selected.len(), "entries selected");

        let months: Vec<MonthReport<'a>> = group_by_month(selected, order)
            .into_iter()
            .map(|g| Self::month_report(g.key, g.entries, &snapshot.rates))
            .collect();

        let grand_total = months.iter().fold(0.0, |acc, m| acc + m.total);
        debug!(months = months.len(), grand_total, "report built");

        Report {
            months,
            grand_total,
        }
    }

    fn month_report<'a>(
        key: MonthKey,
        entries: Vec<&'a TimeEntry>,
        rates: &RateTable,
    ) -> MonthReport<'a> {
        let rows: Vec<EntryRow<'a>> = entries
            .iter()
            .copied()
            .map(|entry| {
                let policy = rates.get(&entry.work_type_id);
                let row = EntryRow {
                    entry,
                    rate: effective_rate(entry, policy),
                    value: compute_entry_value(entry, policy),
                };
                if row.rate.is_none() {
                    debug!(
                        entry = %entry.id,
                        work_type_id = %entry.work_type_id,
                        rate_type = %entry.rate_type(),
                        "no rate configured, entry valued at 0"
                    );
                }
                row
            })
            .collect();

        let total = month_total(entries.iter().copied(), rates);
        debug!(month = %key, rows = rows.len(), total, "month total");

        MonthReport { key, rows, total }
    }
}

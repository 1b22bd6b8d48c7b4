//! Month buckets and their totals.

use crate::core::calculator::entry_value::compute_entry_value;
use crate::models::{MonthKey, RateTable, TimeEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Order in which month groups are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthOrder {
    /// Order of first appearance in the input.
    FirstSeen,
    /// Oldest month first.
    Ascending,
    /// Most recent month first.
    #[default]
    Descending,
}

impl MonthOrder {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "first-seen" | "first_seen" | "input" => Some(Self::FirstSeen),
            "ascending" | "asc" => Some(Self::Ascending),
            "descending" | "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonthOrder::FirstSeen => "first-seen",
            MonthOrder::Ascending => "ascending",
            MonthOrder::Descending => "descending",
        }
    }
}

/// Entries of one calendar month, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    pub key: MonthKey,
    pub entries: Vec<&'a TimeEntry>,
}

impl MonthGroup<'_> {
    pub fn total(&self, rates: &RateTable) -> f64 {
        month_total(self.entries.iter().copied(), rates)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Partition entries by (year, month).
///
/// Every input entry lands in exactly one group. Accepts a slice
/// (`&entries`) or any iterator of borrowed entries.
pub fn group_by_month<'a, I>(entries: I, order: MonthOrder) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut index: HashMap<MonthKey, usize> = HashMap::new();
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();

    for entry in entries {
        let key = entry.month_key();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(MonthGroup {
                key,
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].entries.push(entry);
    }

    match order {
        MonthOrder::FirstSeen => {}
        MonthOrder::Ascending => groups.sort_by_key(|g| g.key),
        MonthOrder::Descending => groups.sort_by(|a, b| b.key.cmp(&a.key)),
    }

    groups
}

/// Sum of entry values, left to right, starting at zero.
///
/// Summing the per-row values in the same order gives the same number.
pub fn month_total<'a, I>(entries: I, rates: &RateTable) -> f64
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries.into_iter().fold(0.0, |total, entry| {
        total + compute_entry_value(entry, rates.get(&entry.work_type_id))
    })
}

/// Sum of all month totals, in group order.
pub fn grand_total(groups: &[MonthGroup<'_>], rates: &RateTable) -> f64 {
    groups.iter().fold(0.0, |total, g| total + g.total(rates))
}

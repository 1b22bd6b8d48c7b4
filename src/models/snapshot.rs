use super::expense::Expense;
use super::rate_policy::{RatePolicy, RateTable};
use super::time_entry::TimeEntry;
use super::work_type::WorkType;
use serde::{Deserialize, Serialize};

/// Everything the entry source hands over in one read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub work_types: Vec<WorkType>,
    #[serde(default)]
    pub rates: RateTable,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    pub fn work_type(&self, id: &str) -> Option<&WorkType> {
        self.work_types.iter().find(|wt| wt.id == id)
    }

    pub fn rate_for(&self, work_type_id: &str) -> Option<&RatePolicy> {
        self.rates.get(work_type_id)
    }

    pub fn entry(&self, id: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

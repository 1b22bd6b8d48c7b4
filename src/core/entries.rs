//! Create, update and delete entries inside a snapshot.
//!
//! The denormalized `work_type` of an entry is always rebuilt from the
//! canonical work type record, so the two cannot drift apart here.

use crate::core::ids::next_numeric_id;
use crate::errors::{AppError, AppResult};
use crate::models::{Snapshot, TimeEntry};
use chrono::{NaiveDate, NaiveTime};

const ENTRY_PREFIX: &str = "e";

/// Fields for a new entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub work_date: NaiveDate,
    pub hours: f64,
    pub work_type_id: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub custom_rate: Option<f64>,
}

/// Fields to change on an existing entry; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub work_date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub work_type_id: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub clear_times: bool,
    pub custom_rate: Option<f64>,
    pub clear_custom_rate: bool,
}

/// High-level business logic for `add`, `edit` and `del`.
pub struct EntryLogic;

impl EntryLogic {
    pub fn add(snapshot: &mut Snapshot, new: NewEntry) -> AppResult<TimeEntry> {
        let work_type = snapshot
            .work_type(&new.work_type_id)
            .ok_or_else(|| AppError::WorkTypeNotFound(new.work_type_id.clone()))?;

        let id = next_numeric_id(ENTRY_PREFIX, snapshot.entries.iter().map(|e| e.id.as_str()))?;

        let mut entry = TimeEntry::new(
            id,
            new.work_date,
            new.hours,
            work_type.id.clone(),
            work_type.as_ref_record(),
        );
        entry.start_time = new.start_time;
        entry.end_time = new.end_time;
        entry.custom_rate = new.custom_rate;

        Self::validate(&entry)?;

        snapshot.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn edit(snapshot: &mut Snapshot, id: &str, patch: EntryPatch) -> AppResult<TimeEntry> {
        let mut updated = snapshot
            .entry(id)
            .cloned()
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        if let Some(wt_id) = &patch.work_type_id {
            let work_type = snapshot
                .work_type(wt_id)
                .ok_or_else(|| AppError::WorkTypeNotFound(wt_id.clone()))?;
            updated.work_type_id = work_type.id.clone();
            updated.work_type = work_type.as_ref_record();
        }

        if let Some(d) = patch.work_date {
            updated.work_date = d;
        }
        if let Some(h) = patch.hours {
            updated.hours = h;
        }

        if patch.clear_times {
            updated.start_time = None;
            updated.end_time = None;
        }
        if patch.start_time.is_some() {
            updated.start_time = patch.start_time;
        }
        if patch.end_time.is_some() {
            updated.end_time = patch.end_time;
        }

        if patch.clear_custom_rate {
            updated.custom_rate = None;
        }
        if patch.custom_rate.is_some() {
            updated.custom_rate = patch.custom_rate;
        }

        // switching away from "Other" drops a stale override
        if !updated.is_other() && patch.custom_rate.is_none() {
            updated.custom_rate = None;
        }

        Self::validate(&updated)?;

        let slot = snapshot
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        *slot = updated.clone();

        Ok(updated)
    }

    pub fn delete(snapshot: &mut Snapshot, id: &str) -> AppResult<TimeEntry> {
        let pos = snapshot
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        Ok(snapshot.entries.remove(pos))
    }

    fn validate(entry: &TimeEntry) -> AppResult<()> {
        if !entry.hours.is_finite() || entry.hours < 0.0 {
            return Err(AppError::InvalidEntry(format!(
                "hours must be a non-negative number, got {}",
                entry.hours
            )));
        }

        if entry.start_time.is_some() != entry.end_time.is_some() {
            return Err(AppError::InvalidEntry(
                "start and end time must be given together".into(),
            ));
        }

        if let (Some(s), Some(e)) = (entry.start_time, entry.end_time)
            && e < s
        {
            return Err(AppError::InvalidEntry(format!(
                "end time {} is before start time {}",
                e.format("%H:%M"),
                s.format("%H:%M")
            )));
        }

        if let Some(rate) = entry.custom_rate {
            if !entry.is_other() {
                return Err(AppError::InvalidEntry(format!(
                    "custom rate is only allowed for the \"Other\" work type, not \"{}\"",
                    entry.work_type.name
                )));
            }
            if !rate.is_finite() || rate < 0.0 {
                return Err(AppError::InvalidEntry(format!(
                    "custom rate must be a non-negative number, got {rate}"
                )));
            }
        }

        Ok(())
    }
}

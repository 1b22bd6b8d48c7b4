//! Period expressions shared by `list`, `summary`, `stats` and `export`.
//!
//! Supported:
//! - YYYY
//! - YYYY-MM
//! - YYYY-MM-DD
//! - YYYY:YYYY
//! - YYYY-MM:YYYY-MM
//! - YYYY-MM-DD:YYYY-MM-DD
//! - all (no bounds)

use crate::errors::{AppError, AppResult};
use crate::models::MonthKey;
use chrono::NaiveDate;

/// Inclusive date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `None` means "all".
    pub fn parse_opt(raw: Option<&str>) -> AppResult<Option<Self>> {
        match raw {
            None => Ok(None),
            Some(r) if r.trim().eq_ignore_ascii_case("all") => Ok(None),
            Some(r) => Self::parse(r).map(Some),
        }
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        let r = raw.trim();
        let invalid = || AppError::InvalidPeriod(r.to_string());

        if let Some((start_raw, end_raw)) = r.split_once(':') {
            let (start, end) = (start_raw.trim(), end_raw.trim());

            if start.len() != end.len() {
                return Err(AppError::InvalidPeriod(format!(
                    "{r} (start and end must have same format)"
                )));
            }

            let first = bounds(start).ok_or_else(invalid)?;
            let last = bounds(end).ok_or_else(invalid)?;

            if first.0 > last.1 {
                return Err(AppError::InvalidPeriod(format!("{r} (start after end)")));
            }

            return Ok(Self {
                start: first.0,
                end: last.1,
            });
        }

        let (start, end) = bounds(r).ok_or_else(invalid)?;
        Ok(Self { start, end })
    }
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds(token: &str) -> Option<(NaiveDate, NaiveDate)> {
    match token.len() {
        4 => {
            let y: i32 = token.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let key = MonthKey::parse(token)?;
            let first = key.first_day()?;
            Some((first, last_day_of_month(key)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn last_day_of_month(key: MonthKey) -> Option<NaiveDate> {
    let (y, m) = if key.month == 12 {
        (key.year + 1, 1)
    } else {
        (key.year, key.month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

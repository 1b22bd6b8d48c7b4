//! Time utilities: parsing HH:MM and rendering clock ranges.

use crate::config::TimeFormat;
use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// "09:00 AM" or "09:00"
pub fn format_clock(t: NaiveTime, fmt: TimeFormat) -> String {
    match fmt {
        TimeFormat::H12 => t.format("%I:%M %p").to_string(),
        TimeFormat::H24 => t.format("%H:%M").to_string(),
    }
}

/// "09:00 AM - 05:00 PM" when both ends are known, `-` otherwise.
pub fn format_time_range(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    fmt: TimeFormat,
) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{} - {}", format_clock(s, fmt), format_clock(e, fmt)),
        _ => "-".to_string(),
    }
}

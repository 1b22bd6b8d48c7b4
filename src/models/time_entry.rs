use super::month_key::MonthKey;
use super::work_type::{RateType, WorkTypeRef};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One logged unit of work.
///
/// `hours` is a quantity: hours for hourly work types, job count for
/// fixed ones. The core only reads entries, it never changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub work_date: NaiveDate, // "YYYY-MM-DD"
    pub hours: f64,

    #[serde(default, with = "opt_clock")]
    pub start_time: Option<NaiveTime>, // "HH:MM" or "HH:MM:SS"
    #[serde(default, with = "opt_clock")]
    pub end_time: Option<NaiveTime>,

    pub work_type_id: String,
    pub work_type: WorkTypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<f64>,
}

impl TimeEntry {
    pub fn new(
        id: impl Into<String>,
        work_date: NaiveDate,
        hours: f64,
        work_type_id: impl Into<String>,
        work_type: WorkTypeRef,
    ) -> Self {
        Self {
            id: id.into(),
            work_date,
            hours,
            start_time: None,
            end_time: None,
            work_type_id: work_type_id.into(),
            work_type,
            custom_rate: None,
        }
    }

    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn with_custom_rate(mut self, rate: f64) -> Self {
        self.custom_rate = Some(rate);
        self
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.work_date)
    }

    pub fn rate_type(&self) -> RateType {
        self.work_type.rate_type
    }

    pub fn is_other(&self) -> bool {
        self.work_type.is_other()
    }

    /// Both clock times present: the row can show a time range.
    pub fn has_time_range(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    pub fn date_str(&self) -> String {
        self.work_date.format("%Y-%m-%d").to_string()
    }
}

/// Optional clock time stored as text. Accepts `HH:MM` and `HH:MM:SS`,
/// always writes `HH:MM`.
mod opt_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid clock time '{s}'"))),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compensation mode of a work type.
///
/// `Fixed` pays a flat amount per job, `Hourly` pays per hour worked.
/// In both cases the entry's `hours` field carries the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Fixed,
    Hourly,
}

impl RateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Fixed => "fixed",
            RateType::Hourly => "hourly",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "fixed" | "f" => Some(RateType::Fixed),
            "hourly" | "h" => Some(RateType::Hourly),
            _ => None,
        }
    }

    /// Unit shown next to the quantity column.
    pub fn unit_label(&self) -> &'static str {
        match self {
            RateType::Fixed => "job(s)",
            RateType::Hourly => "hour(s)",
        }
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical work type record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkType {
    pub id: String,
    pub name: String,
    pub rate_type: RateType,
}

impl WorkType {
    /// Name of the work type that accepts a per-entry custom rate.
    pub const OTHER: &'static str = "Other";

    pub fn new(id: impl Into<String>, name: impl Into<String>, rate_type: RateType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rate_type,
        }
    }

    pub fn is_other(&self) -> bool {
        self.name == Self::OTHER
    }

    /// Denormalized copy embedded in every entry.
    pub fn as_ref_record(&self) -> WorkTypeRef {
        WorkTypeRef {
            name: self.name.clone(),
            rate_type: self.rate_type,
        }
    }
}

/// `{name, rate_type}` as carried by an entry; must agree with the
/// canonical record behind `work_type_id` (not checked here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkTypeRef {
    pub name: String,
    pub rate_type: RateType,
}

impl WorkTypeRef {
    pub fn new(name: impl Into<String>, rate_type: RateType) -> Self {
        Self {
            name: name.into(),
            rate_type,
        }
    }

    pub fn is_other(&self) -> bool {
        self.name == WorkType::OTHER
    }
}

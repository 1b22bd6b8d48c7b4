use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::work_type::RateType;

/// Per work-type compensation amounts.
///
/// Only the field matching the work type's [`RateType`] is meaningful;
/// a missing one means "no rate configured".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_rate: Option<f64>,
}

impl RatePolicy {
    pub fn hourly(rate: f64) -> Self {
        Self {
            hourly_rate: Some(rate),
            fixed_rate: None,
        }
    }

    pub fn fixed(rate: f64) -> Self {
        Self {
            hourly_rate: None,
            fixed_rate: Some(rate),
        }
    }

    /// Rate configured for the given compensation mode, if any.
    pub fn rate_for(&self, rate_type: RateType) -> Option<f64> {
        match rate_type {
            RateType::Fixed => self.fixed_rate,
            RateType::Hourly => self.hourly_rate,
        }
    }
}

/// Rate policies keyed by work-type id (sorted, so saved files are stable).
pub type RateTable = BTreeMap<String, RatePolicy>;

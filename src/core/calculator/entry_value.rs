//! Monetary value of a single entry.
//!
//! Precedence is fixed:
//! 1. "Other" work type with a strictly positive custom rate → custom rate × hours
//!    (the rate table is not consulted at all);
//! 2. fixed or hourly rate from the policy, chosen by the entry's rate type;
//! 3. no matching rate → 0.

use crate::models::{RatePolicy, TimeEntry};

/// True when the entry's own custom rate overrides the rate table.
///
/// A zero, negative or NaN custom rate does not count as an override.
pub fn custom_rate_applies(entry: &TimeEntry) -> bool {
    entry.is_other() && matches!(entry.custom_rate, Some(r) if r > 0.0)
}

/// Rate that [`compute_entry_value`] multiplies `hours` by, if any.
pub fn effective_rate(entry: &TimeEntry, policy: Option<&RatePolicy>) -> Option<f64> {
    if custom_rate_applies(entry) {
        return entry.custom_rate;
    }

    policy.and_then(|p| p.rate_for(entry.rate_type()))
}

/// Value of one entry; `0.0` when no rate is configured.
pub fn compute_entry_value(entry: &TimeEntry, policy: Option<&RatePolicy>) -> f64 {
    match effective_rate(entry, policy) {
        Some(rate) => rate * entry.hours,
        None => 0.0,
    }
}

//! Sequential record ids (`e1`, `e2`, … for entries, `x1`, … for expenses).

use crate::errors::{AppError, AppResult};
use std::collections::HashSet;

/// `<prefix><N>` with N one past the highest numeric suffix in use.
///
/// Ids in a snapshot are free-form, so the highest suffix may already be
/// `u64::MAX`; the lowest unused N is taken instead.
pub fn next_numeric_id<'a, I>(prefix: &str, ids: I) -> AppResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let used: HashSet<u64> = ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .collect();

    let next = match used.iter().max() {
        None => 1,
        Some(max) => match max.checked_add(1) {
            Some(n) => n,
            None => (1..=u64::MAX)
                .find(|n| !used.contains(n))
                .ok_or_else(|| AppError::Other(format!("no free '{prefix}' id left")))?,
        },
    };

    Ok(format!("{prefix}{next}"))
}

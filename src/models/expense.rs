use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Money spent on a given day, subtracted from the month's salary in
/// the monthly statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

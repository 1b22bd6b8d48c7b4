use crate::core::calculator::monthly::{MonthOrder, group_by_month};
use crate::models::{MonthKey, Snapshot};
use serde::Serialize;
use std::collections::BTreeMap;

/// Salary, expenses and net amount for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub key: MonthKey,
    pub total_salary: f64,
    pub total_expenses: f64,
    pub net_amount: f64,
}

/// Per-month statistics. Months with expenses but no entries are included.
pub fn monthly_stats(snapshot: &Snapshot, order: MonthOrder) -> Vec<MonthlyStats> {
    let mut expenses: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for exp in &snapshot.expenses {
        *expenses.entry(MonthKey::from_date(exp.date)).or_insert(0.0) += exp.amount;
    }

    let mut out: Vec<MonthlyStats> = group_by_month(&snapshot.entries, MonthOrder::FirstSeen)
        .into_iter()
        .map(|g| {
            let total_salary = g.total(&snapshot.rates);
            let total_expenses = expenses.remove(&g.key).unwrap_or(0.0);
            MonthlyStats {
                key: g.key,
                total_salary,
                total_expenses,
                net_amount: total_salary - total_expenses,
            }
        })
        .collect();

    // expense-only months
    for (key, total_expenses) in expenses {
        out.push(MonthlyStats {
            key,
            total_salary: 0.0,
            total_expenses,
            net_amount: -total_expenses,
        });
    }

    match order {
        MonthOrder::FirstSeen => {}
        MonthOrder::Ascending => out.sort_by_key(|s| s.key),
        MonthOrder::Descending => out.sort_by(|a, b| b.key.cmp(&a.key)),
    }

    out
}

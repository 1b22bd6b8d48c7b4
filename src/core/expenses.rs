//! Record and remove expenses. They only feed the monthly statistics.

use crate::core::ids::next_numeric_id;
use crate::errors::{AppError, AppResult};
use crate::models::{Expense, Snapshot};
use chrono::NaiveDate;

const EXPENSE_PREFIX: &str = "x";

pub struct ExpenseLogic;

impl ExpenseLogic {
    pub fn add(
        snapshot: &mut Snapshot,
        date: NaiveDate,
        amount: f64,
        description: &str,
    ) -> AppResult<Expense> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::InvalidEntry(format!(
                "expense amount must be a non-negative number, got {amount}"
            )));
        }

        let id = next_numeric_id(
            EXPENSE_PREFIX,
            snapshot.expenses.iter().map(|x| x.id.as_str()),
        )?;

        let expense = Expense {
            id,
            date,
            amount,
            description: description.trim().to_string(),
        };
        snapshot.expenses.push(expense.clone());
        Ok(expense)
    }

    pub fn delete(snapshot: &mut Snapshot, id: &str) -> AppResult<Expense> {
        let pos = snapshot
            .expenses
            .iter()
            .position(|x| x.id == id)
            .ok_or_else(|| AppError::ExpenseNotFound(id.to_string()))?;

        Ok(snapshot.expenses.remove(pos))
    }
}

use crate::cli::commands::load_snapshot;
use crate::cli::parser::ExpenseAction;
use crate::config::Config;
use crate::core::expenses::ExpenseLogic;
use crate::core::period::Period;
use crate::errors::{AppError, AppResult};
use crate::store::EntrySource;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::date::{display_date, parse_date};
use crate::utils::format_currency;
use crate::utils::table::{Column, Table};

pub fn handle(action: &ExpenseAction, cfg: &Config) -> AppResult<()> {
    let (store, mut snapshot) = load_snapshot(cfg)?;

    match action {
        ExpenseAction::Add {
            date,
            amount,
            description,
        } => {
            let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
            let expense = ExpenseLogic::add(&mut snapshot, d, *amount, description)?;
            store.save(&snapshot)?;

            success(format!(
                "Expense {} added: {} {}",
                expense.id,
                expense.date.format("%Y-%m-%d"),
                format_currency(expense.amount, &cfg.currency_symbol)
            ));
        }

        ExpenseAction::List { period } => {
            let period = Period::parse_opt(period.as_deref())?;
            let mut rows: Vec<_> = snapshot
                .expenses
                .iter()
                .filter(|x| period.is_none_or(|p| p.contains(x.date)))
                .collect();

            if rows.is_empty() {
                info("No expenses for the selected period.");
                return Ok(());
            }
            rows.sort_by_key(|x| x.date);

            let mut table = Table::new(vec![
                Column::left("ID"),
                Column::left("Date"),
                Column::right("Amount"),
                Column::left("Description"),
            ])
            .with_rule(&cfg.separator_char);

            for x in rows {
                table.add_row(vec![
                    x.id.clone(),
                    display_date(x.date),
                    format_currency(x.amount, &cfg.currency_symbol),
                    x.description.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        ExpenseAction::Del { id, yes } => {
            let expense = snapshot
                .expenses
                .iter()
                .find(|x| x.id == *id)
                .ok_or_else(|| AppError::ExpenseNotFound(id.clone()))?;

            let question = format!(
                "Delete expense {} ({} {})?",
                expense.id,
                expense.date.format("%Y-%m-%d"),
                format_currency(expense.amount, &cfg.currency_symbol)
            );
            if !*yes && !confirm(&question)? {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = ExpenseLogic::delete(&mut snapshot, id)?;
            store.save(&snapshot)?;
            success(format!("Expense {} has been deleted.", removed.id));
        }
    }

    Ok(())
}

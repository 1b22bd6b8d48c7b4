use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::monthly_stats;
use crate::core::period::Period;
use crate::errors::AppResult;
use crate::models::Snapshot;
use crate::ui::messages::info;
use crate::utils::format_currency;
use crate::utils::table::{Column, Table};

/// Salary / expenses / net per month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period } = cmd {
        let (_, mut snapshot) = load_snapshot(cfg)?;

        if let Some(p) = Period::parse_opt(period.as_deref())? {
            restrict(&mut snapshot, &p);
        }

        let stats = monthly_stats(&snapshot, cfg.month_order);
        if stats.is_empty() {
            info("No entries or expenses for the selected period.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("Salary"),
            Column::right("Expenses"),
            Column::right("Net"),
        ])
        .with_rule(&cfg.separator_char);

        for s in &stats {
            table.add_row(vec![
                s.key.label(),
                format_currency(s.total_salary, &cfg.currency_symbol),
                format_currency(s.total_expenses, &cfg.currency_symbol),
                format_currency(s.net_amount, &cfg.currency_symbol),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}

fn restrict(snapshot: &mut Snapshot, period: &Period) {
    snapshot.entries.retain(|e| period.contains(e.work_date));
    snapshot.expenses.retain(|x| period.contains(x.date));
}

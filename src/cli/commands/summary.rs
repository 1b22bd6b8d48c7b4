use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, ReportFilter};
use crate::core::period::Period;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::format_currency;
use crate::utils::table::{Column, Table};

/// One line per month: label, number of entries, total.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let (_, snapshot) = load_snapshot(cfg)?;

        let filter = ReportFilter {
            period: Period::parse_opt(period.as_deref())?,
            work_type_id: None,
        };
        let report = Core::build_report(&snapshot, &filter, cfg.month_order);

        if report.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("Entries"),
            Column::right("Total"),
        ])
        .with_rule(&cfg.separator_char);

        for m in &report.months {
            table.add_row(vec![
                m.key.label(),
                m.rows.len().to_string(),
                format_currency(m.total, &cfg.currency_symbol),
            ]);
        }
        table.add_row(vec![
            "Total".to_string(),
            report.entry_count().to_string(),
            format_currency(report.grand_total, &cfg.currency_symbol),
        ]);

        print!("{}", table.render());
    }
    Ok(())
}

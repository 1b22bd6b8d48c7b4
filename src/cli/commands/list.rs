use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, MonthReport, ReportFilter};
use crate::core::period::Period;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_amount;
use crate::utils::date::display_date;
use crate::utils::format_currency;
use crate::utils::formatting::{bold, format_hours, separator};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, work_type } = cmd {
        let (_, snapshot) = load_snapshot(cfg)?;

        let filter = ReportFilter {
            period: Period::parse_opt(period.as_deref())?,
            work_type_id: work_type.clone(),
        };
        let report = Core::build_report(&snapshot, &filter, cfg.month_order);

        if report.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        for month in &report.months {
            print_month(month, cfg);
        }

        let total = format_currency(report.grand_total, &cfg.currency_symbol);
        println!(
            "{} {}",
            bold("Grand Total:"),
            colorize_amount(report.grand_total, &total)
        );
    }
    Ok(())
}

fn print_month(month: &MonthReport<'_>, cfg: &Config) {
    println!();
    header(month.key.label());

    let mut columns = vec![Column::left("ID"), Column::left("Date")];
    if cfg.show_time_range {
        columns.push(Column::left("Time"));
    }
    columns.extend([
        Column::left("Work Type"),
        Column::right("Hours/Jobs"),
        Column::right("Rate"),
        Column::right("Entry Total"),
    ]);

    let mut table = Table::new(columns).with_rule(&cfg.separator_char);

    for row in &month.rows {
        let e = row.entry;
        let mut cells = vec![e.id.clone(), display_date(e.work_date)];
        if cfg.show_time_range {
            cells.push(format_time_range(e.start_time, e.end_time, cfg.time_format));
        }
        cells.extend([
            e.work_type.name.clone(),
            format_hours(e.hours, e.rate_type().unit_label()),
            row.rate
                .map(|r| format_currency(r, &cfg.currency_symbol))
                .unwrap_or_else(|| "-".to_string()),
            format_currency(row.value, &cfg.currency_symbol),
        ]);
        table.add_row(cells);
    }

    print!("{}", table.render());
    println!("{}", separator(&cfg.separator_char, 40));

    let total = format_currency(month.total, &cfg.currency_symbol);
    println!(
        "{} {}",
        bold("Monthly Total:"),
        colorize_amount(month.total, &total)
    );
}

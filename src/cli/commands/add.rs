use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_entry_value;
use crate::core::entries::{EntryLogic, NewEntry};
use crate::errors::{AppError, AppResult};
use crate::store::EntrySource;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::format_currency;
use crate::utils::formatting::format_hours;
use crate::utils::time::parse_optional_time;

/// Add an entry to the snapshot.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        work_type,
        hours,
        start,
        end,
        rate,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        let (store, mut snapshot) = load_snapshot(cfg)?;

        let entry = EntryLogic::add(
            &mut snapshot,
            NewEntry {
                work_date: d,
                hours: *hours,
                work_type_id: work_type.clone(),
                start_time: start_parsed,
                end_time: end_parsed,
                custom_rate: *rate,
            },
        )?;

        store.save(&snapshot)?;

        let value = compute_entry_value(&entry, snapshot.rate_for(&entry.work_type_id));
        success(format!(
            "Entry {} added: {} {} {} → {}",
            entry.id,
            entry.date_str(),
            entry.work_type.name,
            format_hours(entry.hours, entry.rate_type().unit_label()),
            format_currency(value, &cfg.currency_symbol)
        ));
    }

    Ok(())
}

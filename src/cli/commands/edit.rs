use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_entry_value;
use crate::core::entries::{EntryLogic, EntryPatch};
use crate::errors::{AppError, AppResult};
use crate::store::EntrySource;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::format_currency;
use crate::utils::time::parse_optional_time;

/// Update fields of an existing entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        work_type,
        hours,
        start,
        end,
        clear_times,
        rate,
        clear_rate,
    } = cmd
    {
        let work_date = match date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let patch = EntryPatch {
            work_date,
            hours: *hours,
            work_type_id: work_type.clone(),
            start_time: parse_optional_time(start.as_ref())?,
            end_time: parse_optional_time(end.as_ref())?,
            clear_times: *clear_times,
            custom_rate: *rate,
            clear_custom_rate: *clear_rate,
        };

        let (store, mut snapshot) = load_snapshot(cfg)?;
        let entry = EntryLogic::edit(&mut snapshot, id, patch)?;
        store.save(&snapshot)?;

        let value = compute_entry_value(&entry, snapshot.rate_for(&entry.work_type_id));
        success(format!(
            "Entry {} updated → {}",
            entry.id,
            format_currency(value, &cfg.currency_symbol)
        ));
    }

    Ok(())
}

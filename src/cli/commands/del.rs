use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::errors::{AppError, AppResult};
use crate::store::EntrySource;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let (store, mut snapshot) = load_snapshot(cfg)?;

        let entry = snapshot
            .entry(id)
            .ok_or_else(|| AppError::EntryNotFound(id.clone()))?;

        let prompt = format!(
            "Delete entry {} ({} {})? This action is irreversible.",
            entry.id,
            entry.date_str(),
            entry.work_type.name
        );

        if !*yes && !confirm(&prompt)? {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = EntryLogic::delete(&mut snapshot, id)?;
        store.save(&snapshot)?;

        success(format!("Entry {} has been deleted.", removed.id));
    }

    Ok(())
}

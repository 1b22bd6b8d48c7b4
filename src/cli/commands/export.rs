use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportKind, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        months,
        force,
    } = cmd
    {
        let (_, snapshot) = load_snapshot(cfg)?;
        let kind = if *months {
            ExportKind::Months
        } else {
            ExportKind::Entries
        };

        ExportLogic::export(
            &snapshot,
            *format,
            kind,
            file,
            range.as_deref(),
            cfg.month_order,
            *force,
        )?;
    }
    Ok(())
}

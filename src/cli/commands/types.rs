use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{RateType, WorkType};
use crate::store::EntrySource;
use crate::ui::messages::{info, success};
use crate::utils::format_currency;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Types {
        add,
        name,
        rate_type,
    } = cmd
    {
        let (store, mut snapshot) = load_snapshot(cfg)?;

        if let Some(id) = add {
            let name = name
                .clone()
                .ok_or_else(|| AppError::Other("--name is required with --add".into()))?;
            let code = rate_type.as_deref().unwrap_or_default();
            let rt = RateType::from_code(code)
                .ok_or_else(|| AppError::InvalidRateType(code.to_string()))?;

            if snapshot.work_type(id).is_some() {
                return Err(AppError::Other(format!("work type '{id}' already exists")));
            }

            snapshot.work_types.push(WorkType::new(id.clone(), name.clone(), rt));
            store.save(&snapshot)?;
            success(format!("Work type '{id}' ({name}, {rt}) added."));
            return Ok(());
        }

        if snapshot.work_types.is_empty() {
            info("No work types defined.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("ID"),
            Column::left("Name"),
            Column::left("Rate type"),
            Column::right("Rate"),
        ])
        .with_rule(&cfg.separator_char);

        for wt in &snapshot.work_types {
            let rate = snapshot
                .rate_for(&wt.id)
                .and_then(|p| p.rate_for(wt.rate_type))
                .map(|r| format_currency(r, &cfg.currency_symbol))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                wt.id.clone(),
                wt.name.clone(),
                wt.rate_type.to_string(),
                rate,
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}

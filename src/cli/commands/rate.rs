use crate::cli::commands::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::EntrySource;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate {
        work_type,
        hourly,
        fixed,
        clear,
    } = cmd
    {
        let (store, mut snapshot) = load_snapshot(cfg)?;

        if snapshot.work_type(work_type).is_none() {
            return Err(AppError::WorkTypeNotFound(work_type.clone()));
        }

        if *clear {
            if snapshot.rates.remove(work_type).is_some() {
                store.save(&snapshot)?;
                success(format!("Rate for '{work_type}' removed."));
            } else {
                info(format!("No rate configured for '{work_type}'."));
            }
            return Ok(());
        }

        for r in [hourly, fixed].into_iter().flatten() {
            if !r.is_finite() || *r < 0.0 {
                return Err(AppError::Other(format!(
                    "rate must be a non-negative number, got {r}"
                )));
            }
        }

        let policy = snapshot.rates.entry(work_type.clone()).or_default();
        if hourly.is_some() {
            policy.hourly_rate = *hourly;
        }
        if fixed.is_some() {
            policy.fixed_rate = *fixed;
        }
        let policy = *policy;

        store.save(&snapshot)?;
        success(format!(
            "Rate for '{work_type}': hourly={} fixed={}",
            policy
                .hourly_rate
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".into()),
            policy
                .fixed_rate
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".into()),
        ));
    }

    Ok(())
}

pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod expense;
pub mod export;
pub mod init;
pub mod list;
pub mod rate;
pub mod stats;
pub mod summary;
pub mod types;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Snapshot;
use crate::store::{EntrySource, FileStore};

/// Open the configured snapshot and read it.
pub(crate) fn load_snapshot(cfg: &Config) -> AppResult<(FileStore, Snapshot)> {
    let store = FileStore::new(cfg.snapshot_path())?;

    if !store.exists() {
        return Err(AppError::Config(format!(
            "snapshot not found: {} (run `rpaysheet init` or pass --snapshot)",
            store.path().display()
        )));
    }

    let snapshot = store.load()?;
    Ok((store, snapshot))
}

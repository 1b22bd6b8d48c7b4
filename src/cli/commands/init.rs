use crate::config::Config;
use crate::errors::AppResult;
use crate::store::FileStore;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (if missing)
///  - an empty snapshot file (if missing)
pub fn handle(cfg: &Config, config_path: &Path) -> AppResult<()> {
    info("Initializing rPaysheet…");

    if config_path.exists() {
        info(format!("Config file : {} (kept)", config_path.display()));
    } else {
        cfg.save_to(config_path)?;
        success(format!("Config file : {}", config_path.display()));
    }

    let store = FileStore::new(cfg.snapshot_path())?;
    if store.init()? {
        success(format!("Snapshot    : {}", store.path().display()));
    } else {
        info(format!("Snapshot    : {} (kept)", store.path().display()));
    }

    success("rPaysheet initialization completed!");
    Ok(())
}

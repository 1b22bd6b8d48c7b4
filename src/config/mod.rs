use crate::core::calculator::MonthOrder;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Clock format used for the start/end column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub month_order: MonthOrder,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_time_range")]
    pub show_time_range: bool,
}

fn default_snapshot() -> String {
    Config::snapshot_file().to_string_lossy().to_string()
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_time_range() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            currency_symbol: default_currency_symbol(),
            month_order: MonthOrder::default(),
            time_format: TimeFormat::default(),
            separator_char: default_separator_char(),
            show_time_range: default_show_time_range(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpaysheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpaysheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpaysheet.conf")
    }

    /// Return the full path of the default snapshot file
    pub fn snapshot_file() -> PathBuf {
        Self::config_dir().join("timesheet.json")
    }

    /// Snapshot path with `~` expanded.
    pub fn snapshot_path(&self) -> PathBuf {
        expand_tilde(&self.snapshot)
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the directory if needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

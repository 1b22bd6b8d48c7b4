//! Whole-file snapshot store (JSON or YAML, chosen by extension).

use super::EntrySource;
use crate::errors::{AppError, AppResult};
use crate::models::Snapshot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(SnapshotFormat::Json),
            "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
            _ => Err(AppError::UnsupportedSnapshot(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let format = SnapshotFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create an empty snapshot file (and its directory) unless one exists.
    /// Returns true when a file was written.
    pub fn init(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        self.save(&Snapshot::default())?;
        Ok(true)
    }
}

impl EntrySource for FileStore {
    fn load(&self) -> AppResult<Snapshot> {
        let content = fs::read_to_string(&self.path)?;

        let snapshot: Snapshot = match self.format {
            SnapshotFormat::Json => serde_json::from_str(&content)?,
            SnapshotFormat::Yaml => serde_yaml::from_str(&content)?,
        };

        debug!(
            path = %self.path.display(),
            entries = snapshot.entries.len(),
            work_types = snapshot.work_types.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &Snapshot) -> AppResult<()> {
        let data = match self.format {
            SnapshotFormat::Json => serde_json::to_string_pretty(snapshot)?,
            SnapshotFormat::Yaml => serde_yaml::to_string(snapshot)?,
        };

        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), entries = snapshot.entries.len(), "snapshot saved");
        Ok(())
    }
}

//! Entry source: where snapshots come from and go back to.

mod file;

pub use file::{FileStore, SnapshotFormat};

use crate::errors::AppResult;
use crate::models::Snapshot;

/// Supplies the entries, work types and rate table for a calculation,
/// and persists the result of add/edit/del.
pub trait EntrySource {
    fn load(&self) -> AppResult<Snapshot>;
    fn save(&self, snapshot: &Snapshot) -> AppResult<()>;
}

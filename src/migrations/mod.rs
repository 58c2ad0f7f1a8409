//! Data migrations for older on-disk formats.
//!
//! Migrations only run while the structured task file is absent. Once
//! `tareas.json` exists it is the single source of truth and older files are
//! left untouched.

mod v001_legacy_text;

use tracing::debug;

use crate::task::{Storage, StorageError, Task};

pub use v001_legacy_text::parse_legacy;

/// Tasks recovered from an older format.
#[derive(Debug)]
pub struct Migrated {
    pub tasks: Vec<Task>,
    /// Set when the tasks could not be written to the structured file
    pub save_error: Option<StorageError>,
}

/// Migrate older data into the structured task file.
///
/// Returns `None` when there was nothing to migrate.
pub fn run_migrations(storage: &Storage) -> Result<Option<Migrated>, StorageError> {
    if storage.exists() {
        debug!("Task file present, skipping migrations");
        return Ok(None);
    }

    v001_legacy_text::run(storage)
}

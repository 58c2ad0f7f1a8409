//! Task storage - JSON file persistence

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::StorageError;
use super::model::Task;

/// Structured task file, read at startup and written on exit.
pub const TASKS_FILE: &str = "tareas.json";

/// Pipe-delimited file written by older releases.
pub const LEGACY_FILE: &str = "tareas.txt";

pub struct Storage {
    tasks_path: PathBuf,
    legacy_path: PathBuf,
}

impl Storage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            tasks_path: data_dir.join(TASKS_FILE),
            legacy_path: data_dir.join(LEGACY_FILE),
        }
    }

    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    pub fn legacy_path(&self) -> &Path {
        &self.legacy_path
    }

    /// Whether the structured task file is present.
    pub fn exists(&self) -> bool {
        self.tasks_path.exists()
    }

    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path).map_err(|source| StorageError::Read {
            path: self.tasks_path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
                path: self.tasks_path.clone(),
                source,
            })?;
        debug!("Read {} tasks from {}", tasks.len(), self.tasks_path.display());
        Ok(tasks)
    }

    /// Overwrite the task file with the whole collection.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.tasks_path.clone(),
            source,
        };

        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        } else if let Some(parent) = self.tasks_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, content).map_err(write_err)?;
        debug!("Wrote {} tasks to {}", tasks.len(), self.tasks_path.display());
        Ok(())
    }
}

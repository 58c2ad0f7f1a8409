//! Migration v001: pipe-delimited text file to JSON
//!
//! Previously: `tareas.txt`, one task per line as `name|priority|status|created`
//! After:     `tareas.json`
//!
//! Extra fields are ignored and lines with fewer than four fields are
//! skipped. The legacy file is read but never modified.

use std::fs;
use tracing::{debug, info, warn};

use super::Migrated;
use crate::task::{Storage, StorageError, Task, TaskId, TaskPriority, TaskStatus};

const DELIMITER: char = '|';
const MIN_FIELDS: usize = 4;

/// A failed read is an error. A failed write still hands back the parsed
/// tasks, with the write error attached.
pub fn run(storage: &Storage) -> Result<Option<Migrated>, StorageError> {
    let legacy_path = storage.legacy_path();
    if !legacy_path.exists() {
        debug!("No legacy task file found, skipping text migration");
        return Ok(None);
    }

    info!("Migrating tasks from {}", legacy_path.display());

    let content = fs::read_to_string(legacy_path).map_err(|source| StorageError::Read {
        path: legacy_path.to_path_buf(),
        source,
    })?;
    let tasks = parse_legacy(&content);
    let save_error = match storage.save(&tasks) {
        Ok(()) => {
            info!("Migrated {} tasks", tasks.len());
            None
        }
        Err(e) => {
            warn!("Migrated {} tasks but could not save them: {}", tasks.len(), e);
            Some(e)
        }
    };

    Ok(Some(Migrated { tasks, save_error }))
}

/// Convert legacy file content into tasks with sequential IDs in file order.
pub fn parse_legacy(content: &str) -> Vec<Task> {
    let mut tasks = Vec::new();

    for line in content.lines() {
        let fields: Vec<&str> = line.trim().split(DELIMITER).collect();
        if fields.len() < MIN_FIELDS {
            debug!("Skipping malformed legacy line: {:?}", line);
            continue;
        }

        let id = tasks.len() as TaskId + 1;
        tasks.push(Task {
            priority: TaskPriority::parse(fields[1]),
            status: TaskStatus::parse(fields[2]),
            created_at: fields[3].to_string(),
            ..Task::new(id, fields[0])
        });
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_parse_legacy_line() {
        let tasks = parse_legacy("Clean house|Alta|Pendiente|01/01/2024\n");

        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.id, 1);
        assert_eq!(task.name, "Clean house");
        assert_eq!(task.priority.label(), "Alta");
        assert_eq!(task.status.label(), "Pendiente");
        assert_eq!(task.created_at, "01/01/2024");
        assert_eq!(task.category, "General");
        assert!(task.description.is_empty());
        assert!(task.due_date.is_empty());
        assert!(task.tags.is_empty());
    }

    #[test]
    fn test_parse_legacy_skips_short_lines() {
        let content = "\
First|Alta|Pendiente|01/01/2024
broken line
Second|Baja|Completada|02/01/2024|extra|fields

Third|Media|Pendiente
Fourth|Rara|Archivada|03/01/2024
";
        let tasks = parse_legacy(content);

        let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Fourth"]);
        let ids: Vec<TaskId> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(tasks[1].status, TaskStatus::Completed);
        assert_eq!(tasks[2].priority.label(), "Rara");
        assert_eq!(tasks[2].status.label(), "Archivada");
    }

    #[test]
    fn test_run_persists_migrated_tasks() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path());
        fs::write(
            storage.legacy_path(),
            "A|Alta|Pendiente|01/01/2024\nB|Media|Completada|02/01/2024\nbad|line\n",
        )?;

        let migrated = run(&storage)?.expect("legacy file should migrate");
        assert!(migrated.save_error.is_none());
        assert_eq!(migrated.tasks.len(), 2);
        assert!(storage.exists());
        assert_eq!(storage.load()?, migrated.tasks);

        // The legacy file is left in place.
        assert!(storage.legacy_path().exists());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_run_keeps_tasks_when_save_fails() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path());
        fs::write(storage.legacy_path(), "A|Alta|Pendiente|01/01/2024
")?;
        // Dangling link: the task file looks absent but cannot be written.
        std::os::unix::fs::symlink(
            temp.path().join("missing").join("tareas.json"),
            storage.tasks_path(),
        )?;

        let migrated = run(&storage)?.expect("legacy file should migrate");
        assert!(matches!(
            migrated.save_error,
            Some(StorageError::Write { .. })
        ));
        assert_eq!(migrated.tasks.len(), 1);
        assert_eq!(migrated.tasks[0].name, "A");
        Ok(())
    }

    #[test]
    fn test_run_without_legacy_file() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path());

        assert!(run(&storage)?.is_none());
        assert!(!storage.exists());
        Ok(())
    }
}

//! In-memory task collection
//!
//! `TaskStore` owns the tasks for a session. Insertion order is display order;
//! lookups are linear scans by ID.

use tracing::{debug, info};

use super::error::{StorageError, TaskError};
use super::filter::TaskFilter;
use super::model::{timestamp_now, Task, TaskId, TaskPriority, TaskStatus, DEFAULT_CATEGORY};
use super::stats::TaskStats;
use super::storage::Storage;
use crate::migrations;

/// What `TaskStore::load` found on disk.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Read from the structured task file
    Loaded(usize),
    /// Converted from the legacy text file. `save_error` is set when the
    /// converted tasks are only held in memory.
    Migrated {
        count: usize,
        save_error: Option<StorageError>,
    },
    /// Nothing on disk
    Empty,
}

/// Input for a new task. Text fields are trimmed on insert.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub priority: TaskPriority,
    /// Falls back to "General" when blank
    pub category: String,
    pub tags: Vec<String>,
    pub due_date: String,
}

/// Field changes for an existing task. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskUpdate {
    /// Build an update from raw prompt answers.
    ///
    /// Blank text keeps the field, and a choice outside the status or
    /// priority table keeps the current value.
    pub fn from_input(name: &str, description: &str, status: &str, priority: &str) -> Self {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        Self {
            name: non_blank(name),
            description: non_blank(description),
            status: TaskStatus::from_choice(status),
            priority: TaskPriority::from_choice(priority),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replace the collection with what is on disk, migrating legacy data
    /// when no structured file exists yet. On error the collection is left
    /// as it was. Migrated tasks are kept even if writing them back fails.
    pub fn load(&mut self, storage: &Storage) -> Result<LoadOutcome, StorageError> {
        if storage.exists() {
            self.tasks = storage.load()?;
            info!("Loaded {} tasks", self.tasks.len());
            return Ok(LoadOutcome::Loaded(self.tasks.len()));
        }

        match migrations::run_migrations(storage)? {
            Some(migrated) => {
                self.tasks = migrated.tasks;
                Ok(LoadOutcome::Migrated {
                    count: self.tasks.len(),
                    save_error: migrated.save_error,
                })
            }
            None => Ok(LoadOutcome::Empty),
        }
    }

    pub fn save(&self, storage: &Storage) -> Result<(), StorageError> {
        storage.save(&self.tasks)?;
        info!("Saved {} tasks", self.tasks.len());
        Ok(())
    }

    /// Get the next available task ID
    pub fn next_id(&self) -> Result<TaskId, TaskError> {
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(TaskError::IdOverflow(max))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a new pending task stamped with the current time.
    pub fn add(&mut self, draft: TaskDraft) -> Result<&Task, TaskError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(TaskError::EmptyName);
        }

        let category = match draft.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            category => category.to_string(),
        };

        let task = Task {
            id: self.next_id()?,
            name: name.to_string(),
            description: draft.description.trim().to_string(),
            priority: draft.priority,
            status: TaskStatus::Pending,
            category,
            created_at: timestamp_now(),
            due_date: draft.due_date.trim().to_string(),
            tags: draft.tags,
        };
        debug!("Adding task {}: {}", task.id, task.name);

        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        Ok(&self.tasks[index])
    }

    pub fn update(&mut self, id: TaskId, changes: TaskUpdate) -> Result<&Task, TaskError> {
        let task = self.get_mut(id).ok_or(TaskError::NotFound(id))?;

        if let Some(name) = changes.name {
            task.name = name;
        }
        if let Some(description) = changes.description {
            task.description = description;
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        debug!("Updated task {}", id);

        Ok(&*task)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        debug!("Removing task {}", id);
        Ok(self.tasks.remove(index))
    }

    /// Matching tasks in collection order
    pub fn filter(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn stats(&self) -> Option<TaskStats> {
        TaskStats::compute(&self.tasks)
    }
}

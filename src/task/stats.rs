//! Collection statistics

use super::model::{Task, TaskPriority, TaskStatus};

/// Counts over a non-empty task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TaskStats {
    /// Returns `None` for an empty collection.
    pub fn compute(tasks: &[Task]) -> Option<Self> {
        if tasks.is_empty() {
            return None;
        }

        let count_status =
            |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
        let count_priority =
            |priority: TaskPriority| tasks.iter().filter(|t| t.priority == priority).count();

        Some(Self {
            total: tasks.len(),
            pending: count_status(TaskStatus::Pending),
            in_progress: count_status(TaskStatus::InProgress),
            completed: count_status(TaskStatus::Completed),
            high: count_priority(TaskPriority::High),
            medium: count_priority(TaskPriority::Medium),
            low: count_priority(TaskPriority::Low),
        })
    }

    /// Share of the total as a percentage.
    pub fn percent(&self, count: usize) -> f64 {
        count as f64 / self.total as f64 * 100.0
    }
}

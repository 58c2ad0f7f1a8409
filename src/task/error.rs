use std::path::PathBuf;
use thiserror::Error;

use super::model::TaskId;

/// Validation and lookup failures for store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task name cannot be empty")]
    EmptyName,

    #[error("Invalid task ID: {0:?}")]
    InvalidId(String),

    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("No task IDs left after {0}")]
    IdOverflow(TaskId),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed task file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parse a user-entered task ID.
///
/// Surrounding whitespace is ignored; anything else that is not a positive
/// integer is rejected before any lookup happens.
pub fn parse_task_id(input: &str) -> Result<TaskId, TaskError> {
    input
        .trim()
        .parse::<TaskId>()
        .map_err(|_| TaskError::InvalidId(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("1"), Ok(1));
        assert_eq!(parse_task_id("  42\n"), Ok(42));
        assert_eq!(
            parse_task_id("abc"),
            Err(TaskError::InvalidId("abc".to_string()))
        );
        assert!(parse_task_id("").is_err());
        assert!(parse_task_id("-1").is_err());
        assert!(parse_task_id("1.5").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TaskError::NotFound(9).to_string(), "Task not found: 9");
        assert_eq!(
            TaskError::InvalidId("x".to_string()).to_string(),
            "Invalid task ID: \"x\""
        );
    }
}

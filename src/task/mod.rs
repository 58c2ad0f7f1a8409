//! Task management module
//!
//! - Task model and the labels used on disk
//! - In-memory collection with create/edit/delete, filters and statistics
//! - Whole-collection JSON persistence

pub mod error;
pub mod filter;
pub mod model;
pub mod stats;
pub mod storage;
pub mod store;

pub use error::{parse_task_id, StorageError, TaskError};
pub use filter::TaskFilter;
pub use model::{parse_tags, Task, TaskId, TaskPriority, TaskStatus};
pub use stats::TaskStats;
pub use storage::Storage;
pub use store::{LoadOutcome, TaskDraft, TaskStore, TaskUpdate};

//! Task data model

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric task identifier, unique within a collection.
pub type TaskId = u64;

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "General";

/// Format of the creation timestamp, e.g. `18/10/2026 09:30`.
pub const CREATED_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Current local time formatted as a creation timestamp.
pub fn timestamp_now() -> String {
    Local::now().format(CREATED_AT_FORMAT).to_string()
}

/// Task status
///
/// Persisted as the labels older task files use. Labels outside the known
/// set are kept verbatim in `Other` so a load/save cycle never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl TaskStatus {
    /// Parse a stored label. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "Pendiente" => Self::Pending,
            "En progreso" => Self::InProgress,
            "Completada" => Self::Completed,
            "Cancelada" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }

    /// Map a menu choice (`1`..`4`) to a status.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Pending),
            "2" => Some(Self::InProgress),
            "3" => Some(Self::Completed),
            "4" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Get the stored label
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En progreso",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
            Self::Other(label) => label,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Completed => "✅",
            _ => "⏳",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task priority
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
    Other(String),
}

impl TaskPriority {
    /// Parse a stored label. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "Alta" => Self::High,
            "Media" => Self::Medium,
            "Baja" => Self::Low,
            other => Self::Other(other.to_string()),
        }
    }

    /// Map a menu choice (`1`..`3`) to a priority.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::High),
            "2" => Some(Self::Medium),
            "3" => Some(Self::Low),
            _ => None,
        }
    }

    /// Get the stored label
    pub fn label(&self) -> &str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
            Self::Other(label) => label,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
            Self::Other(_) => "⚪",
        }
    }
}

impl From<String> for TaskPriority {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TaskPriority> for String {
    fn from(priority: TaskPriority) -> Self {
        priority.label().to_string()
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A task
///
/// Field order and key names match the on-disk `tareas.json` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    #[serde(rename = "nombre")]
    pub name: String,

    /// Empty when not set
    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "prioridad")]
    pub priority: TaskPriority,

    #[serde(rename = "estado")]
    pub status: TaskStatus,

    #[serde(rename = "categoria", default = "default_category")]
    pub category: String,

    /// Human-readable creation time, written once
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: String,

    /// Free text, empty when not set
    #[serde(rename = "fecha_vencimiento", default)]
    pub due_date: String,

    #[serde(rename = "etiquetas", default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Create a pending task stamped with the current time
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            priority: TaskPriority::default(),
            status: TaskStatus::Pending,
            category: default_category(),
            created_at: timestamp_now(),
            due_date: String::new(),
            tags: Vec::new(),
        }
    }

    /// Case-insensitive substring match against the name
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Split a comma-separated tag list, dropping blank entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

//! Listing filters

use super::model::{Task, TaskStatus};

/// Which subset of the collection a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    /// Case-insensitive substring of the task name
    Search(String),
}

impl TaskFilter {
    /// Build a filter from a selector: `None` lists everything, `"pending"`
    /// and `"completed"` select by status, anything else is a name search.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            None => Self::All,
            Some("pending") => Self::Pending,
            Some("completed") => Self::Completed,
            Some(term) => Self::Search(term.to_string()),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => task.status == TaskStatus::Pending,
            Self::Completed => task.status == TaskStatus::Completed,
            Self::Search(term) => task.name_contains(term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, status: TaskStatus) -> Task {
        Task {
            status,
            ..Task::new(1, name)
        }
    }

    #[test]
    fn test_from_selector() {
        assert_eq!(TaskFilter::from_selector(None), TaskFilter::All);
        assert_eq!(TaskFilter::from_selector(Some("pending")), TaskFilter::Pending);
        assert_eq!(
            TaskFilter::from_selector(Some("completed")),
            TaskFilter::Completed
        );
        assert_eq!(
            TaskFilter::from_selector(Some("Pending")),
            TaskFilter::Search("Pending".to_string())
        );
    }

    #[test]
    fn test_status_filters_are_exact() {
        let in_progress = task("a", TaskStatus::InProgress);
        let other = task("b", TaskStatus::Other("pendiente".to_string()));

        assert!(TaskFilter::Pending.matches(&task("c", TaskStatus::Pending)));
        assert!(!TaskFilter::Pending.matches(&in_progress));
        assert!(!TaskFilter::Pending.matches(&other));
        assert!(TaskFilter::Completed.matches(&task("d", TaskStatus::Completed)));
        assert!(!TaskFilter::Completed.matches(&task("e", TaskStatus::Cancelled)));
    }

    #[test]
    fn test_search_matches_name_only() {
        let mut t = task("Write Report", TaskStatus::Pending);
        t.description = "quarterly numbers".to_string();

        assert!(TaskFilter::Search("report".to_string()).matches(&t));
        assert!(TaskFilter::Search("E R".to_string()).matches(&t));
        assert!(!TaskFilter::Search("quarterly".to_string()).matches(&t));
    }
}

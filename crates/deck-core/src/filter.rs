//! Conjunctive task filters.
//!
//! Each predicate is independent and an unset predicate passes every task.
//! Filtering never reorders: output preserves input order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{Priority, TaskStatus};

/// User-selected predicates for the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against the title only.
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub category_id: Option<String>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// True when no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.status.is_none()
            && self.category_id.as_deref().is_none_or(str::is_empty)
            && self.priority.is_none()
    }

    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.status.is_none_or(|status| task.status == status)
            && self.matches_category(task)
            && self.priority.is_none_or(|priority| task.priority == priority)
    }

    fn matches_search(&self, task: &Task) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => task.title.to_lowercase().contains(&term.to_lowercase()),
        }
    }

    fn matches_category(&self, task: &Task) -> bool {
        match self.category_id.as_deref() {
            None | Some("") => true,
            Some(id) => task.category_id.as_deref() == Some(id),
        }
    }

    /// Keep the tasks matching every predicate, in input order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}

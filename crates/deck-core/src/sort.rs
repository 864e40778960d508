//! Single-key task ordering.
//!
//! All orderings use a stable sort, so ties keep their fetch order (which the
//! backend returns newest-first).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::errors::CoreError;

/// Key the task list is ordered by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending due instant; tasks without a due date last.
    #[default]
    DueAt,
    /// Most urgent first.
    Priority,
    /// Newest first.
    CreatedAt,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueAt => "due_at",
            Self::Priority => "priority",
            Self::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "due_at" | "due" => Ok(Self::DueAt),
            "priority" => Ok(Self::Priority),
            "created_at" | "created" => Ok(Self::CreatedAt),
            _ => Err(CoreError::Validation(format!("unknown sort key '{s}'"))),
        }
    }
}

/// Sort key for due instants: `None` compares after every real instant.
fn due_key(task: &Task) -> (bool, Option<DateTime<Utc>>) {
    (task.due_at.is_none(), task.due_at)
}

/// Order `tasks` in place by `key`.
pub fn sort_tasks(tasks: &mut [&Task], key: SortKey) {
    match key {
        SortKey::DueAt => tasks.sort_by_key(|task| due_key(task)),
        SortKey::Priority => tasks.sort_by_key(|task| task.priority.rank()),
        SortKey::CreatedAt => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Priority, TaskStatus};
    use crate::schedule::test_support::{reference_now, task_due};
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn priority_sort_puts_urgent_first() {
        let mut low = task_due("low", TaskStatus::ToDo, None);
        low.priority = Priority::Low;
        let mut urgent = task_due("urgent", TaskStatus::ToDo, None);
        urgent.priority = Priority::Urgent;
        let medium = task_due("medium", TaskStatus::ToDo, None);

        let mut view = vec![&low, &urgent, &medium];
        sort_tasks(&mut view, SortKey::Priority);
        assert_eq!(ids(&view), vec!["urgent", "medium", "low"]);
    }

    #[test]
    fn due_sort_puts_undated_last_and_is_stable() {
        let now = reference_now();
        let undated_1 = task_due("u1", TaskStatus::ToDo, None);
        let late = task_due("late", TaskStatus::ToDo, Some(now + TimeDelta::days(400)));
        let undated_2 = task_due("u2", TaskStatus::ToDo, None);
        let early = task_due("early", TaskStatus::ToDo, Some(now - TimeDelta::days(3)));

        let mut view = vec![&undated_1, &late, &undated_2, &early];
        sort_tasks(&mut view, SortKey::DueAt);
        assert_eq!(ids(&view), vec!["early", "late", "u1", "u2"]);
    }

    #[test]
    fn created_sort_is_newest_first() {
        let mut old = task_due("old", TaskStatus::ToDo, None);
        old.created_at = reference_now() - TimeDelta::days(10);
        let mut new = task_due("new", TaskStatus::ToDo, None);
        new.created_at = reference_now();

        let mut view = vec![&old, &new];
        sort_tasks(&mut view, SortKey::CreatedAt);
        assert_eq!(ids(&view), vec!["new", "old"]);
    }

    #[rstest]
    #[case("due_at", SortKey::DueAt)]
    #[case("due-at", SortKey::DueAt)]
    #[case("Priority", SortKey::Priority)]
    #[case("created", SortKey::CreatedAt)]
    fn parses_sort_key(#[case] raw: &str, #[case] expected: SortKey) {
        assert_eq!(raw.parse::<SortKey>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_sort_key() {
        assert!("title".parse::<SortKey>().is_err());
    }
}

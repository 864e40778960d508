//! Project completion and per-category counts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Project, Task};
use crate::enums::{ProjectStatus, TaskStatus};
use crate::stats::percent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectProgress {
    pub total: usize,
    pub completed: usize,
    pub percent: u8,
}

impl ProjectProgress {
    /// Progress over a project's linked tasks.
    #[must_use]
    pub fn of<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let (total, completed) = tasks.into_iter().fold((0, 0), |(total, done), task| {
            (total + 1, done + usize::from(task.status == TaskStatus::Done))
        });
        Self {
            total,
            completed,
            percent: percent(completed, total),
        }
    }

    /// Progress for `project_id` over the whole task collection.
    #[must_use]
    pub fn for_project(project_id: &str, tasks: &[Task]) -> Self {
        Self::of(
            tasks
                .iter()
                .filter(|task| task.project_id.as_deref() == Some(project_id)),
        )
    }
}

/// Number of tasks assigned to a category.
#[must_use]
pub fn task_count(category_id: &str, tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|task| task.category_id.as_deref() == Some(category_id))
        .count()
}

/// Predicates for the project list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectFilter {
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// Exact status. When unset, archived projects are hidden.
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let name_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => project.name.to_lowercase().contains(&term.to_lowercase()),
        };
        let status_ok = self.status.map_or(
            project.status != ProjectStatus::Archived,
            |status| project.status == status,
        );
        name_ok && status_ok
    }

    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::test_support::{reference_now, task_due};
    use pretty_assertions::assert_eq;

    fn project(id: &str, name: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.into(),
            owner_id: "user-1".into(),
            name: name.into(),
            description: None,
            category_id: Some("work".into()),
            status,
            start_date: None,
            target_end_date: None,
            created_at: reference_now(),
            updated_at: reference_now(),
        }
    }

    fn linked(id: &str, status: TaskStatus, project: &str) -> Task {
        let mut task = task_due(id, status, None);
        task.project_id = Some(project.into());
        task.category_id = Some("work".into());
        task
    }

    #[test]
    fn empty_project_is_zero_percent() {
        assert_eq!(ProjectProgress::for_project("p1", &[]), ProjectProgress::default());
    }

    #[test]
    fn progress_counts_only_linked_done_tasks() {
        let tasks = vec![
            linked("a", TaskStatus::Done, "p1"),
            linked("b", TaskStatus::Cancelled, "p1"),
            linked("c", TaskStatus::ToDo, "p1"),
            linked("d", TaskStatus::Done, "p2"),
        ];
        let progress = ProjectProgress::for_project("p1", &tasks);
        assert_eq!(
            progress,
            ProjectProgress {
                total: 3,
                completed: 1,
                percent: 33,
            }
        );
        assert_eq!(task_count("work", &tasks), 4);
        assert_eq!(task_count("home", &tasks), 0);
    }

    #[test]
    fn archived_hidden_unless_requested() {
        let projects = vec![
            project("1", "Website relaunch", ProjectStatus::Active),
            project("2", "Old site", ProjectStatus::Archived),
            project("3", "Garden", ProjectStatus::OnHold),
        ];

        let default: Vec<&str> = ProjectFilter::default()
            .apply(&projects)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(default, vec!["1", "3"]);

        let archived = ProjectFilter {
            status: Some(ProjectStatus::Archived),
            ..ProjectFilter::default()
        };
        assert_eq!(archived.apply(&projects).len(), 1);

        let search = ProjectFilter {
            search: Some("SITE".into()),
            ..ProjectFilter::default()
        };
        let found: Vec<&str> = search.apply(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(found, vec!["1"]);
    }
}

//! The task view-model pipeline: filter, then sort, then optionally group.
//!
//! ```text
//! tasks ──filter──▶ matching ──sort──▶ ordered ──group──▶ sections
//!   └────────────────────stats (full collection)───────────────▶
//! ```
//!
//! Every stage is a pure function of its inputs and the injected [`Schedule`].

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::filter::TaskFilter;
use crate::schedule::Schedule;
use crate::sections::Sections;
use crate::sort::{SortKey, sort_tasks};
use crate::stats::TaskStats;

/// Filter and sort selection for the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQuery {
    pub filter: TaskFilter,
    pub sort: SortKey,
}

impl TaskQuery {
    /// Matching tasks in display order.
    #[must_use]
    pub fn run<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let mut view = self.filter.apply(tasks);
        sort_tasks(&mut view, self.sort);
        view
    }
}

/// Everything the dashboard renders for one collection.
#[derive(Debug, Clone)]
pub struct TaskView<'a> {
    pub list: Vec<&'a Task>,
    pub sections: Sections<'a>,
    pub stats: TaskStats,
}

impl<'a> TaskView<'a> {
    #[must_use]
    pub fn build<Tz: TimeZone>(schedule: &Schedule<Tz>, query: &TaskQuery, tasks: &'a [Task]) -> Self {
        let list = query.run(tasks);
        let sections = Sections::group(schedule, &list);
        Self {
            stats: TaskStats::compute(schedule, tasks),
            list,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Priority, TaskStatus};
    use crate::schedule::test_support::{reference_now, task_due};
    use crate::sections::Section;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;

    #[test]
    fn stats_ignore_the_filter() {
        let now = reference_now();
        let mut urgent = task_due("urgent", TaskStatus::ToDo, Some(now - TimeDelta::hours(2)));
        urgent.priority = Priority::Urgent;
        let mut later = task_due("later", TaskStatus::ToDo, Some(now - TimeDelta::hours(1)));
        later.priority = Priority::Low;
        let done = task_due("done", TaskStatus::Done, None);
        let tasks = vec![later, done, urgent];

        let query = TaskQuery {
            filter: TaskFilter {
                status: Some(TaskStatus::ToDo),
                ..TaskFilter::default()
            },
            sort: SortKey::Priority,
        };
        let view = TaskView::build(&Schedule::new(now), &query, &tasks);

        let ids: Vec<&str> = view.list.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["urgent", "later"]);
        assert_eq!(view.sections.get(Section::Overdue).len(), 2);
        assert!(view.sections.get(Section::Completed).is_empty());
        assert_eq!(view.stats.total, 3);
        assert_eq!(view.stats.completion_rate, 33);
    }
}

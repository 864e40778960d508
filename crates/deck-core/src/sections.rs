//! Display buckets for the task list.
//!
//! Every task lands in exactly one bucket, chosen by the first matching rule:
//!
//! ```text
//! completed → overdue → today → upcoming → other
//! ```
//!
//! Grouping is a stable partition of an already sorted list.

use chrono::TimeZone;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::schedule::Schedule;

/// One of the five mutually exclusive display buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overdue,
    Today,
    Upcoming,
    Completed,
    Other,
}

impl Section {
    /// Rendering order of the buckets.
    pub const DISPLAY_ORDER: [Self; 5] = [
        Self::Overdue,
        Self::Today,
        Self::Upcoming,
        Self::Completed,
        Self::Other,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Other => "Other",
        }
    }

    /// Bucket for a single task.
    #[must_use]
    pub fn of<Tz: TimeZone>(schedule: &Schedule<Tz>, task: &Task) -> Self {
        if task.status.is_closed() {
            Self::Completed
        } else if schedule.is_overdue(task) {
            Self::Overdue
        } else if schedule.is_due_today(task) {
            Self::Today
        } else if schedule.is_upcoming(task) {
            Self::Upcoming
        } else {
            Self::Other
        }
    }
}

/// A non-empty bucket ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SectionGroup<'a> {
    pub section: Section,
    pub title: &'static str,
    pub tasks: Vec<&'a Task>,
}

/// The task list partitioned into buckets.
#[derive(Debug, Clone, Default)]
pub struct Sections<'a> {
    overdue: Vec<&'a Task>,
    today: Vec<&'a Task>,
    upcoming: Vec<&'a Task>,
    completed: Vec<&'a Task>,
    other: Vec<&'a Task>,
}

impl<'a> Sections<'a> {
    /// Partition `tasks`, keeping their relative order within each bucket.
    #[must_use]
    pub fn group<Tz: TimeZone>(schedule: &Schedule<Tz>, tasks: &[&'a Task]) -> Self {
        let mut sections = Self::default();
        for &task in tasks {
            sections.bucket_mut(Section::of(schedule, task)).push(task);
        }
        sections
    }

    fn bucket_mut(&mut self, section: Section) -> &mut Vec<&'a Task> {
        match section {
            Section::Overdue => &mut self.overdue,
            Section::Today => &mut self.today,
            Section::Upcoming => &mut self.upcoming,
            Section::Completed => &mut self.completed,
            Section::Other => &mut self.other,
        }
    }

    #[must_use]
    pub fn get(&self, section: Section) -> &[&'a Task] {
        match section {
            Section::Overdue => &self.overdue,
            Section::Today => &self.today,
            Section::Upcoming => &self.upcoming,
            Section::Completed => &self.completed,
            Section::Other => &self.other,
        }
    }

    /// Total number of tasks across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        Section::DISPLAY_ORDER
            .iter()
            .map(|section| self.get(*section).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets in display order, skipping empty ones.
    #[must_use]
    pub fn non_empty(&self) -> Vec<SectionGroup<'a>> {
        Section::DISPLAY_ORDER
            .iter()
            .filter(|section| !self.get(**section).is_empty())
            .map(|&section| SectionGroup {
                section,
                title: section.title(),
                tasks: self.get(section).to_vec(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TaskStatus;
    use crate::schedule::test_support::{reference_now, task_due};
    use chrono::{TimeDelta, Utc};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn schedule() -> Schedule<Utc> {
        Schedule::new(reference_now())
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn fixture() -> Vec<Task> {
        let now = reference_now();
        vec![
            task_due("overdue", TaskStatus::ToDo, Some(now - TimeDelta::hours(1))),
            task_due("done-late", TaskStatus::Done, Some(now - TimeDelta::hours(1))),
            task_due("cancelled", TaskStatus::Cancelled, Some(now + TimeDelta::hours(3))),
            task_due("today", TaskStatus::InProgress, Some(now + TimeDelta::hours(3))),
            task_due("upcoming", TaskStatus::ToDo, Some(now + TimeDelta::days(2))),
            task_due("far", TaskStatus::ToDo, Some(now + TimeDelta::days(20))),
            task_due("undated", TaskStatus::ToDo, None),
        ]
    }

    #[test]
    fn overdue_today_task_goes_to_overdue_only() {
        let tasks = fixture();
        let refs: Vec<&Task> = tasks.iter().collect();
        let sections = Sections::group(&schedule(), &refs);
        assert_eq!(ids(sections.get(Section::Overdue)), vec!["overdue"]);
        assert_eq!(ids(sections.get(Section::Today)), vec!["today"]);
        assert_eq!(ids(sections.get(Section::Upcoming)), vec!["upcoming"]);
    }

    #[test]
    fn closed_tasks_go_to_completed_regardless_of_due() {
        let tasks = fixture();
        let refs: Vec<&Task> = tasks.iter().collect();
        let sections = Sections::group(&schedule(), &refs);
        assert_eq!(ids(sections.get(Section::Completed)), vec!["done-late", "cancelled"]);
        assert_eq!(ids(sections.get(Section::Other)), vec!["far", "undated"]);
    }

    #[test]
    fn buckets_partition_the_input() {
        let tasks = fixture();
        let refs: Vec<&Task> = tasks.iter().collect();
        let sections = Sections::group(&schedule(), &refs);
        assert_eq!(sections.len(), tasks.len());

        let mut seen = HashSet::new();
        for section in Section::DISPLAY_ORDER {
            for task in sections.get(section) {
                assert!(seen.insert(task.id.clone()), "{} appears twice", task.id);
            }
        }
        let input: HashSet<String> = tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(seen, input);
    }

    #[test]
    fn grouping_preserves_sorted_order() {
        let now = reference_now();
        let tasks = [
            task_due("b", TaskStatus::ToDo, Some(now - TimeDelta::hours(2))),
            task_due("a", TaskStatus::ToDo, Some(now - TimeDelta::hours(5))),
        ];
        let refs: Vec<&Task> = tasks.iter().collect();
        let sections = Sections::group(&schedule(), &refs);
        assert_eq!(ids(sections.get(Section::Overdue)), vec!["b", "a"]);
    }

    #[test]
    fn empty_buckets_are_omitted_in_display_order() {
        let now = reference_now();
        let tasks = [
            task_due("x", TaskStatus::Done, None),
            task_due("y", TaskStatus::ToDo, Some(now - TimeDelta::minutes(5))),
        ];
        let refs: Vec<&Task> = tasks.iter().collect();
        let groups = Sections::group(&schedule(), &refs).non_empty();
        let order: Vec<Section> = groups.iter().map(|g| g.section).collect();
        assert_eq!(order, vec![Section::Overdue, Section::Completed]);
        assert_eq!(groups[0].title, "Overdue");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let sections = Sections::group(&schedule(), &[]);
        assert!(sections.is_empty());
        assert!(sections.non_empty().is_empty());
    }
}

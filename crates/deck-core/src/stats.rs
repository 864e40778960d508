//! Summary counters for the dashboard cards.
//!
//! Always computed over the owner's full task collection, never the filtered
//! list view.

use chrono::TimeZone;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::TaskStatus;
use crate::schedule::Schedule;

/// Per-status task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub to_do: usize,
    pub in_progress: usize,
    pub done: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::ToDo => self.to_do,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
            TaskStatus::Cancelled => self.cancelled,
        }
    }

    const fn bump(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::ToDo => self.to_do += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Done => self.done += 1,
            TaskStatus::Cancelled => self.cancelled += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskStats {
    pub total: usize,
    pub by_status: StatusCounts,
    pub overdue: usize,
    pub due_today: usize,
    /// High or Urgent priority tasks not yet Done.
    pub high_priority_open: usize,
    /// `round(100 × done / total)`, 0 for an empty collection.
    pub completion_rate: u8,
}

impl TaskStats {
    #[must_use]
    pub fn compute<Tz: TimeZone>(schedule: &Schedule<Tz>, tasks: &[Task]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            stats.by_status.bump(task.status);
            if schedule.is_overdue(task) {
                stats.overdue += 1;
            }
            if schedule.is_due_today(task) {
                stats.due_today += 1;
            }
            if task.priority.is_elevated() && task.status != TaskStatus::Done {
                stats.high_priority_open += 1;
            }
        }
        stats.completion_rate = percent(stats.by_status.done, stats.total);
        stats
    }
}

/// Rounded percentage of `part` in `whole`, halves rounding up; 0 when `whole` is 0.
#[must_use]
pub fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded).unwrap_or(100)
}

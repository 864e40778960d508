//! Task status transitions.
//!
//! Every status change goes through [`apply_status`], which keeps
//! `completed_at` consistent with `status` and refreshes `updated_at`.

use chrono::{DateTime, Utc};

use crate::entities::{NewTask, Task};
use crate::enums::TaskStatus;

/// Move `task` to `status` at instant `now`.
///
/// Entering `Done` stamps `completed_at`; leaving `Done` clears it. Setting the
/// current status again still refreshes `updated_at` but keeps the original
/// completion instant.
pub fn apply_status(task: &mut Task, status: TaskStatus, now: DateTime<Utc>) {
    task.completed_at = completion_for(task.status, task.completed_at, status, now);
    task.status = status;
    task.updated_at = now;
}

/// The `completed_at` value a task should carry after moving from `from` to `to`.
#[must_use]
pub fn completion_for(
    from: TaskStatus,
    current: Option<DateTime<Utc>>,
    to: TaskStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (from, to) {
        (TaskStatus::Done, TaskStatus::Done) => current.or(Some(now)),
        (_, TaskStatus::Done) => Some(now),
        _ => None,
    }
}

/// Status reached by the completion checkbox: Done goes back to To Do,
/// anything else becomes Done.
#[must_use]
pub const fn toggle_complete(status: TaskStatus) -> TaskStatus {
    match status {
        TaskStatus::Done => TaskStatus::ToDo,
        _ => TaskStatus::Done,
    }
}

/// Build the creation form for a copy of `task`.
///
/// All user fields are cloned, the title gets a `" (copy)"` suffix, and the
/// status resets to To Do. Identity and timestamps come from the store.
#[must_use]
pub fn duplicate(task: &Task) -> NewTask {
    NewTask {
        title: format!("{} (copy)", task.title),
        description: task.description.clone(),
        category_id: task.category_id.clone(),
        project_id: task.project_id.clone(),
        status: TaskStatus::ToDo,
        priority: task.priority,
        due_at: task.due_at,
    }
}

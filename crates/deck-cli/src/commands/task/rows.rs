use std::fmt::Display;

use chrono::TimeZone;
use deck_core::entities::{SyncState, Task};
use deck_core::format::{ABSENT, format_date, format_due, format_timestamp, relative_time};
use deck_core::schedule::Schedule;
use deck_core::sections::Section;
use serde::Serialize;

/// Flattened task for `--format table`.
#[derive(Debug, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub status: &'static str,
    pub priority: &'static str,
    pub due: String,
    pub section: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<&'static str>,
}

impl TaskRow {
    pub fn new<Tz>(task: &Task, schedule: &Schedule<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status.as_str(),
            priority: task.priority.as_str(),
            due: format_due(task.due_at, &schedule.now().timezone()),
            section: Section::of(schedule, task).title(),
            sync: (task.sync == SyncState::PendingSync).then_some("pending_sync"),
        }
    }
}

/// Single task for `task get --format table`.
#[derive(Debug, Serialize)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub row: TaskRow,
    pub description: String,
    pub category: String,
    pub project: String,
    pub created: String,
    pub updated: String,
    pub completed: String,
}

impl TaskDetail {
    pub fn new<Tz>(task: &Task, schedule: &Schedule<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let text = |value: Option<&str>| value.unwrap_or(ABSENT).to_string();
        Self {
            row: TaskRow::new(task, schedule),
            description: text(task.description.as_deref()),
            category: text(task.category_id.as_deref()),
            project: text(task.project_id.as_deref()),
            created: format_timestamp(Some(task.created_at), schedule.now()),
            updated: relative_time(task.updated_at, schedule.now_utc()),
            completed: format_date(task.completed_at, &schedule.now().timezone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use deck_core::entities::{SyncState, Task};
    use deck_core::enums::{Priority, TaskStatus};
    use deck_core::schedule::Schedule;
    use pretty_assertions::assert_eq;

    use super::{TaskDetail, TaskRow};

    fn task(due_in_hours: Option<i64>) -> Task {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        Task {
            id: "t1".into(),
            owner_id: "user-1".into(),
            title: "Write report".into(),
            description: None,
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_at: due_in_hours.map(|h| now + TimeDelta::hours(h)),
            category_id: Some("work".into()),
            project_id: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
            sync: SyncState::Confirmed,
        }
    }

    #[test]
    fn overdue_task_row() {
        let schedule = Schedule::new(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap());
        let row = TaskRow::new(&task(Some(-3)), &schedule);
        assert_eq!(row.status, "In Progress");
        assert_eq!(row.priority, "High");
        assert_eq!(row.due, "Mar 10 at 9:00 AM");
        assert_eq!(row.section, "Overdue");
        assert_eq!(row.sync, None);
    }

    #[test]
    fn pending_rows_are_marked() {
        let schedule = Schedule::new(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap());
        let mut pending = task(None);
        pending.sync = SyncState::PendingSync;
        let row = TaskRow::new(&pending, &schedule);
        assert_eq!(row.section, "Other");
        assert_eq!(row.sync, Some("pending_sync"));
    }

    #[test]
    fn detail_formats_timestamps_in_viewer_time() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let schedule = Schedule::new(now + TimeDelta::hours(3));
        let mut done = task(Some(24));
        done.status = TaskStatus::Done;
        done.updated_at = now - TimeDelta::hours(2);
        done.completed_at = Some(done.updated_at);

        let detail = TaskDetail::new(&done, &schedule);
        assert_eq!(detail.row.section, "Completed");
        assert_eq!(detail.description, "—");
        assert_eq!(detail.category, "work");
        assert_eq!(detail.created, "Mar 10 — 12:00 PM");
        assert_eq!(detail.updated, "5 hours ago");
        assert_eq!(detail.completed, "Mar 10, 2026");
    }

    #[test]
    fn detail_table_keeps_row_columns_first() {
        let schedule = Schedule::new(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap());
        let value = serde_json::to_value(TaskDetail::new(&task(None), &schedule)).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(&keys[..3], ["id", "title", "status"]);
        assert!(!keys.contains(&"sync"));
        assert_eq!(value["updated"], "just now");
    }
}

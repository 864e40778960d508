//! Time classification of tasks relative to "now".
//!
//! A [`Schedule`] pins the current instant and the viewer's timezone (the
//! timezone of `now`). Calendar-date predicates compare dates in that timezone;
//! instant predicates compare absolute timestamps.
//!
//! ```text
//! overdue   : open, due < now
//! due soon  : open, now <= due <= now + window
//! due today : open, local date(due) == today
//! upcoming  : open, today < local date(due) <= today + N days
//! ```
//!
//! "Open" means neither Done nor Cancelled.

use chrono::{DateTime, Days, NaiveDate, TimeDelta, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;

/// Default "due soon" look-ahead.
pub const DEFAULT_DUE_SOON_MINUTES: i64 = 120;

/// Default "upcoming" horizon in calendar days.
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Single temporal state of a task, used for badges.
///
/// Evaluated in declaration order; the first matching state wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeState {
    Overdue,
    DueSoon,
    DueToday,
    Upcoming,
    /// Has a due date but none of the windows above apply (far future, or closed).
    Later,
    /// No due date.
    Unscheduled,
}

/// Classifier bound to one instant and timezone.
#[derive(Debug, Clone)]
pub struct Schedule<Tz: TimeZone> {
    now: DateTime<Tz>,
    now_utc: DateTime<Utc>,
    due_soon_window: TimeDelta,
    upcoming_days: u32,
}

impl<Tz: TimeZone> Schedule<Tz> {
    #[must_use]
    pub fn new(now: DateTime<Tz>) -> Self {
        let now_utc = now.with_timezone(&Utc);
        Self {
            now,
            now_utc,
            due_soon_window: TimeDelta::minutes(DEFAULT_DUE_SOON_MINUTES),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
        }
    }

    #[must_use]
    pub fn with_due_soon_window(mut self, window: TimeDelta) -> Self {
        self.due_soon_window = window;
        self
    }

    #[must_use]
    pub fn with_upcoming_days(mut self, days: u32) -> Self {
        self.upcoming_days = days;
        self
    }

    #[must_use]
    pub const fn now(&self) -> &DateTime<Tz> {
        &self.now
    }

    #[must_use]
    pub const fn now_utc(&self) -> DateTime<Utc> {
        self.now_utc
    }

    /// Today's calendar date in the viewer's timezone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Calendar date of `instant` in the viewer's timezone.
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.now.timezone()).date_naive()
    }

    /// Open task whose due instant is strictly before now.
    #[must_use]
    pub fn is_overdue(&self, task: &Task) -> bool {
        if task.status.is_closed() {
            return false;
        }
        task.due_at.is_some_and(|due| due < self.now_utc)
    }

    /// Open, not overdue, and due no later than `now + window` (inclusive).
    #[must_use]
    pub fn is_due_soon(&self, task: &Task) -> bool {
        if task.status.is_closed() || self.is_overdue(task) {
            return false;
        }
        // A window past chrono's range covers every future instant.
        let horizon = self.now_utc.checked_add_signed(self.due_soon_window);
        task.due_at
            .is_some_and(|due| horizon.is_none_or(|horizon| due <= horizon))
    }

    /// Open task due on today's local calendar date.
    #[must_use]
    pub fn is_due_today(&self, task: &Task) -> bool {
        if task.status.is_closed() {
            return false;
        }
        task.due_at
            .is_some_and(|due| self.local_date(due) == self.today())
    }

    /// Open task due after today and within the upcoming horizon, comparing
    /// calendar dates only.
    #[must_use]
    pub fn is_upcoming(&self, task: &Task) -> bool {
        if task.status.is_closed() {
            return false;
        }
        let today = self.today();
        let Some(horizon) = today.checked_add_days(Days::new(u64::from(self.upcoming_days)))
        else {
            return false;
        };
        task.due_at.is_some_and(|due| {
            let date = self.local_date(due);
            date > today && date <= horizon
        })
    }

    /// Collapse the predicates into one badge state.
    #[must_use]
    pub fn classify(&self, task: &Task) -> TimeState {
        if task.due_at.is_none() {
            TimeState::Unscheduled
        } else if self.is_overdue(task) {
            TimeState::Overdue
        } else if self.is_due_soon(task) {
            TimeState::DueSoon
        } else if self.is_due_today(task) {
            TimeState::DueToday
        } else if self.is_upcoming(task) {
            TimeState::Upcoming
        } else {
            TimeState::Later
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::entities::{SyncState, Task};
    use crate::enums::{Priority, TaskStatus};

    /// Fixed reference instant for classifier tests: 2026-03-10 10:00 UTC.
    pub fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap()
    }

    pub fn task_due(id: &str, status: TaskStatus, due_at: Option<DateTime<Utc>>) -> Task {
        Task {
            id: id.to_string(),
            owner_id: "user-1".into(),
            title: format!("Task {id}"),
            description: None,
            status,
            priority: Priority::Medium,
            due_at,
            category_id: None,
            project_id: None,
            created_at: reference_now() - chrono::TimeDelta::days(30),
            updated_at: reference_now() - chrono::TimeDelta::days(30),
            completed_at: None,
            sync: SyncState::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{reference_now, task_due};
    use super::*;
    use crate::enums::TaskStatus;
    use chrono::FixedOffset;
    use rstest::rstest;

    fn schedule() -> Schedule<Utc> {
        Schedule::new(reference_now())
    }

    fn in_minutes(minutes: i64) -> Option<DateTime<Utc>> {
        Some(reference_now() + TimeDelta::minutes(minutes))
    }

    #[rstest]
    #[case::done(TaskStatus::Done)]
    #[case::cancelled(TaskStatus::Cancelled)]
    fn closed_tasks_are_never_overdue_or_due_soon(#[case] status: TaskStatus) {
        let s = schedule();
        for offset in [-600, -1, 0, 1, 119, 120] {
            let task = task_due("t", status, in_minutes(offset));
            assert!(!s.is_overdue(&task), "offset {offset}");
            assert!(!s.is_due_soon(&task), "offset {offset}");
        }
    }

    #[test]
    fn due_exactly_now_is_due_soon_not_overdue() {
        let s = schedule();
        let task = task_due("t", TaskStatus::ToDo, in_minutes(0));
        assert!(!s.is_overdue(&task));
        assert!(s.is_due_soon(&task));
        assert_eq!(s.classify(&task), TimeState::DueSoon);
    }

    #[rstest]
    #[case::one_second_ago(-1, true, false)]
    #[case::two_hours_out(120, false, true)]
    #[case::past_window(121, false, false)]
    #[case::far_future(60 * 24 * 3, false, false)]
    fn instant_predicates(
        #[case] offset_minutes: i64,
        #[case] overdue: bool,
        #[case] due_soon: bool,
    ) {
        let s = schedule();
        let due = if offset_minutes == -1 {
            Some(reference_now() - TimeDelta::seconds(1))
        } else {
            in_minutes(offset_minutes)
        };
        let task = task_due("t", TaskStatus::InProgress, due);
        assert_eq!(s.is_overdue(&task), overdue);
        assert_eq!(s.is_due_soon(&task), due_soon);
    }

    #[test]
    fn window_beyond_date_range_is_unbounded() {
        let s = schedule().with_due_soon_window(TimeDelta::minutes(140_000_000_000));
        let far = task_due("t", TaskStatus::ToDo, in_minutes(60 * 24 * 365 * 50));
        assert!(s.is_due_soon(&far));
        assert_eq!(s.classify(&far), TimeState::DueSoon);

        let late = task_due("late", TaskStatus::ToDo, in_minutes(-1));
        assert!(!s.is_due_soon(&late));
    }

    #[test]
    fn overdue_task_due_earlier_today_classifies_as_overdue() {
        let s = schedule();
        let task = task_due("t", TaskStatus::ToDo, in_minutes(-60));
        assert!(s.is_due_today(&task));
        assert_eq!(s.classify(&task), TimeState::Overdue);
    }

    #[test]
    fn due_today_excludes_cancelled() {
        let s = schedule();
        let task = task_due("t", TaskStatus::Cancelled, in_minutes(300));
        assert!(!s.is_due_today(&task));
        assert_eq!(s.classify(&task), TimeState::Later);
    }

    #[test]
    fn upcoming_uses_calendar_dates() {
        let s = schedule();
        let tomorrow_early = Utc.with_ymd_and_hms(2026, 3, 11, 0, 5, 0).single();
        let day_seven_late = Utc.with_ymd_and_hms(2026, 3, 17, 23, 59, 0).single();
        let day_eight = Utc.with_ymd_and_hms(2026, 3, 18, 0, 1, 0).single();

        assert!(s.is_upcoming(&task_due("a", TaskStatus::ToDo, tomorrow_early)));
        assert!(s.is_upcoming(&task_due("b", TaskStatus::ToDo, day_seven_late)));
        assert!(!s.is_upcoming(&task_due("c", TaskStatus::ToDo, day_eight)));
        assert!(!s.is_upcoming(&task_due("d", TaskStatus::ToDo, in_minutes(300))));
    }

    #[test]
    fn calendar_dates_follow_viewer_timezone() {
        // 22:00 UTC on Mar 10 is already Mar 11 at UTC+5.
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        let s = Schedule::new(reference_now().with_timezone(&plus_five));
        let late = Utc.with_ymd_and_hms(2026, 3, 10, 22, 0, 0).single();
        let task = task_due("t", TaskStatus::ToDo, late);
        assert!(!s.is_due_today(&task));
        assert!(s.is_upcoming(&task));
    }

    #[test]
    fn classify_unscheduled_and_later() {
        let s = schedule();
        assert_eq!(
            s.classify(&task_due("a", TaskStatus::ToDo, None)),
            TimeState::Unscheduled
        );
        assert_eq!(
            s.classify(&task_due("b", TaskStatus::ToDo, in_minutes(60 * 24 * 30))),
            TimeState::Later
        );
    }

    #[test]
    fn custom_windows() {
        let s = schedule()
            .with_due_soon_window(TimeDelta::minutes(30))
            .with_upcoming_days(1);
        assert!(!s.is_due_soon(&task_due("a", TaskStatus::ToDo, in_minutes(45))));
        let in_two_days = Utc.with_ymd_and_hms(2026, 3, 12, 9, 0, 0).single();
        assert!(!s.is_upcoming(&task_due("b", TaskStatus::ToDo, in_two_days)));
    }
}

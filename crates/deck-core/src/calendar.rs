//! Month, week, and day calendar layouts.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, TimeZone};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::errors::CoreError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarView {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            _ => Err(CoreError::Validation(format!("unknown calendar view '{s}'"))),
        }
    }
}

/// Layout of a month for a Sunday-first grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Empty cells before the 1st (Sunday = 0).
    pub leading_blanks: u32,
    pub days: Vec<NaiveDate>,
}

/// Grid for the month containing `anchor`.
#[must_use]
pub fn month_grid(anchor: NaiveDate) -> MonthGrid {
    let first = anchor - Days::new(u64::from(anchor.day0()));
    let days = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect();
    MonthGrid {
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

/// Monday through Sunday of the week containing `anchor`.
#[must_use]
pub fn week_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let monday = anchor - Days::new(u64::from(anchor.weekday().num_days_from_monday()));
    monday.iter_days().take(7).collect()
}

/// Tasks whose due instant falls on `date` in `tz`. Undated tasks never match.
pub fn tasks_on<'a, Tz: TimeZone>(tz: &Tz, date: NaiveDate, tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| {
            task.due_at
                .is_some_and(|due| due.with_timezone(tz).date_naive() == date)
        })
        .collect()
}

/// [`tasks_on`] ordered by due instant ascending.
pub fn day_agenda<'a, Tz: TimeZone>(tz: &Tz, date: NaiveDate, tasks: &'a [Task]) -> Vec<&'a Task> {
    let mut agenda = tasks_on(tz, date, tasks);
    agenda.sort_by_key(|task| task.due_at);
    agenda
}

/// Move `anchor` by `delta` months, weeks, or days.
///
/// Month steps clamp the day to the target month's length (Jan 31 → Feb 28).
/// Returns `None` when the result leaves chrono's date range.
#[must_use]
pub fn step(anchor: NaiveDate, view: CalendarView, delta: i32) -> Option<NaiveDate> {
    let magnitude = delta.unsigned_abs();
    match view {
        CalendarView::Month => {
            let months = Months::new(magnitude);
            if delta < 0 {
                anchor.checked_sub_months(months)
            } else {
                anchor.checked_add_months(months)
            }
        }
        CalendarView::Week | CalendarView::Day => {
            let per_step = if view == CalendarView::Week { 7 } else { 1 };
            let days = Days::new(u64::from(magnitude) * per_step);
            if delta < 0 {
                anchor.checked_sub_days(days)
            } else {
                anchor.checked_add_days(days)
            }
        }
    }
}

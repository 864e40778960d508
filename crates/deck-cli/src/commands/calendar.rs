use std::fmt::Display;

use chrono::{Local, NaiveDate, TimeZone};
use deck_core::calendar::{CalendarView, day_agenda, month_grid, step, week_dates};
use deck_core::entities::Task;
use deck_core::format::format_time;
use deck_store::Origin;
use serde::Serialize;

use crate::cli::root_commands::CalendarArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{parse_date, parse_value};
use crate::commands::shared::source::warning;
use crate::context::AppContext;
use crate::output::{notice, output};

#[derive(Debug, Serialize)]
struct CalendarResponse {
    view: CalendarView,
    anchor: NaiveDate,
    previous: Option<NaiveDate>,
    next: Option<NaiveDate>,
    /// Month view only: empty cells before the 1st in a Sunday-first grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    leading_blanks: Option<u32>,
    days: Vec<CalendarDay>,
    source: Origin,
}

#[derive(Debug, Serialize)]
struct CalendarDay {
    date: NaiveDate,
    weekday: String,
    is_today: bool,
    entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct Entry {
    id: String,
    time: String,
    title: String,
    status: &'static str,
    priority: &'static str,
}

/// Flattened entry for `--format table`.
#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    date: NaiveDate,
    #[serde(flatten)]
    entry: &'a Entry,
}

/// Handle `deck calendar`.
pub async fn handle(args: &CalendarArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = parse_value::<CalendarView>(&args.view, "view")?;
    let today = Local::now().date_naive();
    let anchor = args
        .date
        .as_deref()
        .map(|raw| parse_date(raw, "date"))
        .transpose()?
        .unwrap_or(today);

    let loaded = ctx.store.load_tasks().await;
    if let Some(message) = warning(loaded.origin, loaded.error.as_deref()) {
        notice(&message, flags.quiet);
    }

    let response = layout(view, anchor, today, &Local, &loaded.records, loaded.origin);
    if flags.format == OutputFormat::Table {
        let rows = response
            .days
            .iter()
            .flat_map(|day| day.entries.iter().map(|entry| EntryRow { date: day.date, entry }))
            .collect::<Vec<_>>();
        return output(&rows, flags.format);
    }
    output(&response, flags.format)
}

fn layout<Tz>(
    view: CalendarView,
    anchor: NaiveDate,
    today: NaiveDate,
    tz: &Tz,
    tasks: &[Task],
    source: Origin,
) -> CalendarResponse
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (dates, leading_blanks) = match view {
        CalendarView::Month => {
            let grid = month_grid(anchor);
            (grid.days, Some(grid.leading_blanks))
        }
        CalendarView::Week => (week_dates(anchor), None),
        CalendarView::Day => (vec![anchor], None),
    };

    let days = dates
        .into_iter()
        .map(|date| CalendarDay {
            date,
            weekday: date.format("%a").to_string(),
            is_today: date == today,
            entries: day_agenda(tz, date, tasks)
                .into_iter()
                .map(|task| Entry {
                    id: task.id.clone(),
                    time: format_time(task.due_at, tz),
                    title: task.title.clone(),
                    status: task.status.as_str(),
                    priority: task.priority.as_str(),
                })
                .collect(),
        })
        .collect();

    CalendarResponse {
        view,
        anchor,
        previous: step(anchor, view, -1),
        next: step(anchor, view, 1),
        leading_blanks,
        days,
        source,
    }
}

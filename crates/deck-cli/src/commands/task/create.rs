use chrono::{DateTime, Local, Utc};
use deck_core::entities::NewTask;
use deck_core::format::build_due_at;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_opt};
use crate::context::AppContext;
use crate::output::{notice, output};

pub struct CreateInput<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub project: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub status: Option<&'a str>,
    pub due: Option<&'a str>,
    pub at: Option<&'a str>,
}

impl CreateInput<'_> {
    fn form(&self, now: &DateTime<Local>) -> anyhow::Result<NewTask> {
        Ok(NewTask {
            title: self.title.to_string(),
            description: self.description.map(str::to_string),
            category_id: self.category.map(str::to_string),
            project_id: self.project.map(str::to_string),
            status: parse_opt(self.status, "status")?.unwrap_or_default(),
            priority: parse_opt(self.priority, "priority")?.unwrap_or_default(),
            due_at: due_instant(self.due, self.at, now)?,
        })
    }
}

/// Local `--due` date plus optional `--at` time as a UTC instant.
pub(super) fn due_instant(
    due: Option<&str>,
    at: Option<&str>,
    now: &DateTime<Local>,
) -> anyhow::Result<Option<DateTime<Utc>>> {
    due.map(|raw| -> anyhow::Result<DateTime<Utc>> {
        let date = parse_date(raw, "due")?;
        Ok(build_due_at(date, at, now)?)
    })
    .transpose()
}

pub async fn run(input: &CreateInput<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = input.form(&Local::now())?;
    let created = ctx.store.create_task(form).await?;
    if let Some(message) = &created.notice {
        notice(message, flags.quiet);
    }
    output(&created, flags.format)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use deck_core::enums::{Priority, TaskStatus};
    use pretty_assertions::assert_eq;

    use super::CreateInput;

    fn input<'a>() -> CreateInput<'a> {
        CreateInput {
            title: "Write report",
            description: None,
            category: Some("work"),
            project: None,
            priority: None,
            status: None,
            due: None,
            at: None,
        }
    }

    #[test]
    fn defaults_to_medium_todo_without_due() {
        let now = Local::now();
        let form = input().form(&now).expect("form should build");
        assert_eq!(form.status, TaskStatus::ToDo);
        assert_eq!(form.priority, Priority::Medium);
        assert_eq!(form.due_at, None);
        assert_eq!(form.category_id.as_deref(), Some("work"));
    }

    #[test]
    fn due_date_and_time_are_local() {
        let now = Local::now();
        let form = CreateInput {
            due: Some("2026-03-10"),
            at: Some("15:45"),
            priority: Some("high"),
            ..input()
        }
        .form(&now)
        .expect("form should build");
        let expected = Local
            .with_ymd_and_hms(2026, 3, 10, 15, 45, 0)
            .earliest()
            .unwrap()
            .to_utc();
        assert_eq!(form.due_at, Some(expected));
        assert_eq!(form.priority, Priority::High);
    }

    #[test]
    fn malformed_time_is_rejected() {
        let now = Local::now();
        let result = CreateInput {
            due: Some("2026-03-10"),
            at: Some("3pm"),
            ..input()
        }
        .form(&now);
        assert!(result.is_err());
    }
}

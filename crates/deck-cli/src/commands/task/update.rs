use chrono::{DateTime, Local, Utc};
use deck_core::format::{build_due_at, split_due_at};
use deck_store::updates::{TaskUpdate, TaskUpdateBuilder};

use super::create::due_instant;
use crate::cli::GlobalFlags;
use crate::commands::shared::input::blank_to_none;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output;

pub struct UpdateInput<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub project: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub due: Option<&'a str>,
    pub at: Option<&'a str>,
    pub clear_due: bool,
}

impl UpdateInput<'_> {
    /// `existing_due` is only consulted for `--at` without `--due`.
    fn build(
        &self,
        existing_due: Option<DateTime<Utc>>,
        now: &DateTime<Local>,
    ) -> anyhow::Result<TaskUpdate> {
        let mut builder = TaskUpdateBuilder::new();
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(description) = blank_to_none(self.description) {
            builder = builder.description(description);
        }
        if let Some(category) = blank_to_none(self.category) {
            builder = builder.category_id(category);
        }
        if let Some(project) = blank_to_none(self.project) {
            builder = builder.project_id(project);
        }
        if let Some(priority) = self.priority {
            builder = builder.priority(parse_value(priority, "priority")?);
        }

        if self.clear_due {
            builder = builder.due_at(None);
        } else if self.due.is_some() {
            builder = builder.due_at(due_instant(self.due, self.at, now)?);
        } else if let Some(time) = self.at {
            let existing = existing_due.ok_or_else(|| {
                anyhow::anyhow!("--at needs --due because the task has no due date")
            })?;
            let (date, _) = split_due_at(existing, &Local);
            builder = builder.due_at(Some(build_due_at(date, Some(time), now)?));
        }

        Ok(builder.build())
    }
}

pub async fn run(id: &str, input: &UpdateInput<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let existing_due = if input.at.is_some() && input.due.is_none() {
        ctx.store.get_task(id).await?.due_at
    } else {
        None
    };

    let update = input.build(existing_due, &Local::now())?;
    if update.is_empty() {
        anyhow::bail!("nothing to update; pass at least one field flag");
    }
    output(&ctx.store.update_task(id, update).await?, flags.format)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Timelike};
    use pretty_assertions::assert_eq;

    use super::UpdateInput;

    fn input<'a>() -> UpdateInput<'a> {
        UpdateInput {
            title: None,
            description: None,
            category: None,
            project: None,
            priority: None,
            due: None,
            at: None,
            clear_due: false,
        }
    }

    #[test]
    fn no_flags_is_empty() {
        let update = input().build(None, &Local::now()).expect("update should build");
        assert!(update.is_empty());
    }

    #[test]
    fn blank_description_clears_it() {
        let update = UpdateInput {
            description: Some(""),
            ..input()
        }
        .build(None, &Local::now())
        .expect("update should build");
        assert_eq!(update.description, Some(None));
    }

    #[test]
    fn clear_due_removes_the_date() {
        let update = UpdateInput {
            clear_due: true,
            ..input()
        }
        .build(None, &Local::now())
        .expect("update should build");
        assert_eq!(update.due_at, Some(None));
    }

    #[test]
    fn time_only_keeps_the_existing_date() {
        let existing = Local
            .with_ymd_and_hms(2026, 3, 10, 9, 0, 0)
            .earliest()
            .unwrap()
            .to_utc();
        let update = UpdateInput {
            at: Some("17:30"),
            ..input()
        }
        .build(Some(existing), &Local::now())
        .expect("update should build");
        let due = update.due_at.flatten().expect("due should be set").with_timezone(&Local);
        assert_eq!(due.date_naive(), existing.with_timezone(&Local).date_naive());
        assert_eq!((due.hour(), due.minute()), (17, 30));
    }

    #[test]
    fn time_only_without_existing_due_fails() {
        let result = UpdateInput {
            at: Some("17:30"),
            ..input()
        }
        .build(None, &Local::now());
        assert!(result.is_err());
    }
}

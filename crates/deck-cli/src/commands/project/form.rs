use deck_core::entities::NewProject;
use deck_store::updates::{ProjectUpdate, ProjectUpdateBuilder};

use crate::commands::shared::input::blank_to_none;
use crate::commands::shared::parse::{parse_date, parse_opt, parse_opt_date};

/// Project flags shared by `create` and `update`.
pub struct ProjectFields<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

impl ProjectFields<'_> {
    pub fn new_project(&self, status: Option<&str>) -> anyhow::Result<NewProject> {
        Ok(NewProject {
            name: self.name.unwrap_or_default().to_string(),
            description: self.description.map(str::to_string),
            category_id: self.category.map(str::to_string),
            status: parse_opt(status, "status")?.unwrap_or_default(),
            start_date: parse_opt_date(self.start, "start")?,
            target_end_date: parse_opt_date(self.end, "end")?,
        })
    }

    /// Empty `--start`/`--end` values clear the date.
    pub fn update(&self) -> anyhow::Result<ProjectUpdate> {
        let mut builder = ProjectUpdateBuilder::new();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(description) = blank_to_none(self.description) {
            builder = builder.description(description);
        }
        if let Some(category) = blank_to_none(self.category) {
            builder = builder.category_id(category);
        }
        if let Some(start) = blank_to_none(self.start) {
            builder = builder.start_date(start.map(|raw| parse_date(&raw, "start")).transpose()?);
        }
        if let Some(end) = blank_to_none(self.end) {
            builder = builder.target_end_date(end.map(|raw| parse_date(&raw, "end")).transpose()?);
        }

        let update = builder.build();
        if update == ProjectUpdate::default() {
            anyhow::bail!("nothing to update; pass at least one field flag");
        }
        Ok(update)
    }
}

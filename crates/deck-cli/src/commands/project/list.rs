use deck_core::entities::Project;
use deck_core::progress::{ProjectFilter, ProjectProgress};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_opt;
use crate::commands::shared::source::{Listing, emit};
use crate::context::AppContext;

#[derive(Serialize)]
struct ProjectRow<'a> {
    #[serde(flatten)]
    project: &'a Project,
    #[serde(flatten)]
    progress: ProjectProgress,
}

pub async fn run(
    search: Option<&str>,
    status: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = ProjectFilter {
        search: search.map(str::to_string),
        status: parse_opt(status, "status")?,
    };
    let projects = ctx.store.load_projects().await;
    let tasks = ctx.store.load_tasks().await.records;

    let mut rows = filter
        .apply(&projects.records)
        .into_iter()
        .map(|project| ProjectRow {
            progress: ProjectProgress::for_project(&project.id, &tasks),
            project,
        })
        .collect::<Vec<_>>();
    truncate(
        &mut rows,
        effective_limit(flags.limit, ctx.config.general.default_limit),
    );

    emit(&Listing::new(&projects, rows), flags)
}

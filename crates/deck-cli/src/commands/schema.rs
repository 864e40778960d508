use deck_core::entities::{Category, Project, Task};
use deck_core::responses::{CategorySummary, DashboardSummary, ProjectDetail};
use deck_core::stats::TaskStats;
use schemars::Schema;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPES: &str = "task, category, category-summary, project, project-detail, stats, dashboard";

/// Handle `deck schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for(&args.type_name)?, flags.format)
}

fn schema_for(type_name: &str) -> anyhow::Result<Schema> {
    Ok(match type_name.trim().to_lowercase().replace('_', "-").as_str() {
        "task" => schemars::schema_for!(Task),
        "category" => schemars::schema_for!(Category),
        "category-summary" => schemars::schema_for!(CategorySummary),
        "project" => schemars::schema_for!(Project),
        "project-detail" => schemars::schema_for!(ProjectDetail),
        "stats" => schemars::schema_for!(TaskStats),
        "dashboard" => schemars::schema_for!(DashboardSummary),
        other => anyhow::bail!("unknown schema type '{other}'; expected one of: {TYPES}"),
    })
}

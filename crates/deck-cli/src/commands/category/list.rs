use deck_core::progress::task_count;
use deck_core::responses::CategorySummary;

use crate::cli::GlobalFlags;
use crate::commands::shared::source::{Listing, emit};
use crate::context::AppContext;

pub async fn run(active_only: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories = ctx.store.load_categories().await;
    let tasks = ctx.store.load_tasks().await.records;

    let rows = categories
        .records
        .iter()
        .filter(|category| !active_only || category.is_active())
        .map(|category| CategorySummary {
            task_count: task_count(&category.id, &tasks),
            category: category.clone(),
        })
        .collect::<Vec<_>>();

    emit(&Listing::new(&categories, rows), flags)
}

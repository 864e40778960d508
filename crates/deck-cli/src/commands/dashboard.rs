use deck_core::pipeline::{TaskQuery, TaskView};
use deck_core::responses::{DashboardSummary, SectionCounts};

use crate::cli::GlobalFlags;
use crate::commands::shared::source::warning;
use crate::context::AppContext;
use crate::output::{notice, output};

/// Handle `deck dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = ctx.store.load_tasks().await;
    if let Some(message) = warning(loaded.origin, loaded.error.as_deref()) {
        notice(&message, flags.quiet);
    }

    let schedule = ctx.schedule();
    let view = TaskView::build(&schedule, &TaskQuery::default(), &loaded.records);

    output(
        &DashboardSummary {
            greeting_name: ctx.session.user.first_name(),
            stats: view.stats,
            sections: SectionCounts::from(&view.sections),
            source: loaded.origin.as_str().to_string(),
        },
        flags.format,
    )
}

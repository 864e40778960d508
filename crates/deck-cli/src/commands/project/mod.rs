mod form;
mod list;

use deck_core::enums::ProjectStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output;

/// Handle `deck project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List { search, status } => {
            list::run(search.as_deref(), status.as_deref(), ctx, flags).await
        }
        ProjectCommands::Get { id } => output(&ctx.store.project_detail(id).await?, flags.format),
        ProjectCommands::Create {
            name,
            description,
            category,
            status,
            start,
            end,
        } => {
            let form = form::ProjectFields {
                name: Some(name.as_str()),
                description: description.as_deref(),
                category: category.as_deref(),
                start: start.as_deref(),
                end: end.as_deref(),
            }
            .new_project(status.as_deref())?;
            output(&ctx.store.create_project(form).await?, flags.format)
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            category,
            start,
            end,
        } => {
            let update = form::ProjectFields {
                name: name.as_deref(),
                description: description.as_deref(),
                category: category.as_deref(),
                start: start.as_deref(),
                end: end.as_deref(),
            }
            .update()?;
            output(&ctx.store.update_project(id, update).await?, flags.format)
        }
        ProjectCommands::Status { id, status } => {
            let status = parse_value::<ProjectStatus>(status, "status")?;
            output(&ctx.store.set_project_status(id, status).await?, flags.format)
        }
        ProjectCommands::Delete { id } => {
            ctx.store.delete_project(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}

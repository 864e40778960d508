mod create;
mod list;
mod rows;
mod update;

use deck_core::enums::TaskStatus;

use self::rows::TaskDetail;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output;

/// Handle `deck task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::List {
            search,
            status,
            category,
            priority,
            sort,
            grouped,
        } => {
            let options = list::ListOptions {
                search: search.as_deref(),
                status: status.as_deref(),
                category: category.as_deref(),
                priority: priority.as_deref(),
                sort: sort.as_deref(),
                grouped: *grouped,
            };
            list::run(&options, ctx, flags).await
        }
        TaskCommands::Get { id } => {
            let task = ctx.store.get_task(id).await?;
            if flags.format == OutputFormat::Table {
                output(&TaskDetail::new(&task, &ctx.schedule()), flags.format)
            } else {
                output(&task, flags.format)
            }
        }
        TaskCommands::Create {
            title,
            description,
            category,
            project,
            priority,
            status,
            due,
            at,
        } => {
            let input = create::CreateInput {
                title,
                description: description.as_deref(),
                category: category.as_deref(),
                project: project.as_deref(),
                priority: priority.as_deref(),
                status: status.as_deref(),
                due: due.as_deref(),
                at: at.as_deref(),
            };
            create::run(&input, ctx, flags).await
        }
        TaskCommands::Update {
            id,
            title,
            description,
            category,
            project,
            priority,
            due,
            at,
            clear_due,
        } => {
            let input = update::UpdateInput {
                title: title.as_deref(),
                description: description.as_deref(),
                category: category.as_deref(),
                project: project.as_deref(),
                priority: priority.as_deref(),
                due: due.as_deref(),
                at: at.as_deref(),
                clear_due: *clear_due,
            };
            update::run(id, &input, ctx, flags).await
        }
        TaskCommands::Status { id, status } => {
            let status = parse_value::<TaskStatus>(status, "status")?;
            output(&ctx.store.set_task_status(id, status).await?, flags.format)
        }
        TaskCommands::Toggle { id } => output(&ctx.store.toggle_task(id).await?, flags.format),
        TaskCommands::Duplicate { id } => output(&ctx.store.duplicate_task(id).await?, flags.format),
        TaskCommands::Delete { id } => {
            ctx.store.delete_task(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}

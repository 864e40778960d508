mod list;

use deck_core::entities::{DEFAULT_CATEGORY_COLOR, NewCategory};
use deck_store::updates::{CategoryUpdate, CategoryUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::input::blank_to_none;
use crate::context::AppContext;
use crate::output::{notice, output};

/// Handle `deck category`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List { active } => list::run(*active, ctx, flags).await,
        CategoryCommands::Create {
            name,
            description,
            color,
        } => {
            let form = NewCategory {
                name: name.clone(),
                description: description.clone(),
                color: color.clone().unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            };
            let created = ctx.store.create_category(form).await?;
            if let Some(message) = &created.notice {
                notice(message, flags.quiet);
            }
            output(&created, flags.format)
        }
        CategoryCommands::Update {
            id,
            name,
            description,
            color,
        } => {
            let update = build_update(name.as_deref(), description.as_deref(), color.as_deref());
            if update == CategoryUpdate::default() {
                anyhow::bail!("nothing to update; pass --name, --description, or --color");
            }
            output(&ctx.store.update_category(id, update).await?, flags.format)
        }
        CategoryCommands::Toggle { id } => output(&ctx.store.toggle_category(id).await?, flags.format),
        CategoryCommands::Delete { id } => {
            ctx.store.delete_category(id)?;
            output(&Deleted::new(id), flags.format)
        }
    }
}

fn build_update(name: Option<&str>, description: Option<&str>, color: Option<&str>) -> CategoryUpdate {
    let mut builder = CategoryUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(description) = blank_to_none(description) {
        builder = builder.description(description);
    }
    if let Some(color) = color {
        builder = builder.color(color);
    }
    builder.build()
}

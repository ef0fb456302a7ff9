use crate::cli::GlobalFlags;
use crate::cli::subcommands::PositionCommands;
use crate::commands::shared::page::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};

/// Handle `tk position`.
pub async fn handle(
    action: &PositionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PositionCommands::Create { name } => {
            let position = ctx.service.create_position(name).await?;
            output(&position, flags.format)
        }
        PositionCommands::List { search } => {
            let query = list_query(search.as_deref(), ctx, flags);
            let page = ctx.service.list_positions(&query).await?;
            output_page(&page, flags.format)
        }
        PositionCommands::Get { id } => {
            let position = ctx.service.get_position(id).await?;
            output(&position, flags.format)
        }
        PositionCommands::Rename { id, name } => {
            let position = ctx.service.rename_position(id, name).await?;
            output(&position, flags.format)
        }
        PositionCommands::Delete { id } => {
            ctx.service.delete_position(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskTypeCommands;
use crate::commands::shared::page::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};

/// Handle `tk task-type`.
pub async fn handle(
    action: &TaskTypeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskTypeCommands::Create { name } => {
            let task_type = ctx.service.create_task_type(name).await?;
            output(&task_type, flags.format)
        }
        TaskTypeCommands::List { search } => {
            let query = list_query(search.as_deref(), ctx, flags);
            let page = ctx.service.list_task_types(&query).await?;
            output_page(&page, flags.format)
        }
        TaskTypeCommands::Get { id } => {
            let task_type = ctx.service.get_task_type(id).await?;
            output(&task_type, flags.format)
        }
        TaskTypeCommands::Rename { id, name } => {
            let task_type = ctx.service.rename_task_type(id, name).await?;
            output(&task_type, flags.format)
        }
        TaskTypeCommands::Delete { id } => {
            ctx.service.delete_task_type(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

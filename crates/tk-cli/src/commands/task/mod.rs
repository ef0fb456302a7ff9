mod assignees;
mod create;
mod update;

use chrono::Utc;
use tk_core::responses::ToggleAssignmentResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::clock;
use crate::commands::shared::page::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};

/// Handle `tk task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            name,
            description,
            deadline,
            priority,
            task_type,
            assignee,
        } => {
            create::run(
                create::Params {
                    name: name.clone(),
                    description: description.clone(),
                    deadline: deadline.clone(),
                    priority: priority.clone(),
                    task_type: task_type.clone(),
                    assignees: assignee.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::List { search } => {
            let query = list_query(search.as_deref(), ctx, flags);
            let page = ctx.service.list_tasks(&query).await?;
            output_page(&page, flags.format)
        }
        TaskCommands::Get { id } => {
            let task = ctx.service.task_detail(id, clock::today()).await?;
            output(&task, flags.format)
        }
        TaskCommands::Update {
            id,
            name,
            description,
            deadline,
            priority,
            task_type,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    name: name.clone(),
                    description: description.clone(),
                    deadline: deadline.clone(),
                    priority: priority.clone(),
                    task_type: task_type.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Delete { id } => {
            ctx.service.delete_task(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        TaskCommands::Finish { id } => {
            let task = ctx.service.get_task(id).await?;
            let task = ctx.service.finish_task(task, Utc::now()).await?;
            output(&task, flags.format)
        }
        TaskCommands::Assign { id, worker } => {
            let state = ctx.service.toggle_assignment(worker, id).await?;
            let response = ToggleAssignmentResponse {
                task_id: id.clone(),
                worker_id: worker.clone(),
                state,
            };
            output(&response, flags.format)
        }
        TaskCommands::Assignees { id, set } => {
            assignees::run(id, set.as_deref(), ctx, flags).await
        }
    }
}

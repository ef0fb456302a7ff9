use tk_core::entities::NewWorker;
use tk_core::ids::PREFIX_WORKER;
use tk_db::updates::worker::WorkerUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WorkerCommands;
use crate::commands::shared::page::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};

/// Handle `tk worker`.
pub async fn handle(
    action: &WorkerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WorkerCommands::Create {
            username,
            first_name,
            last_name,
            email,
            position,
        } => {
            let worker = ctx
                .service
                .create_worker(NewWorker {
                    username: username.clone(),
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    email: email.clone(),
                    position_id: position.clone(),
                    credentials: None,
                })
                .await?;
            output(&worker, flags.format)
        }
        WorkerCommands::List { search } => {
            let query = list_query(search.as_deref(), ctx, flags);
            let page = ctx.service.list_workers(&query).await?;
            output_page(&page, flags.format)
        }
        WorkerCommands::Get { id } => {
            let worker = if is_worker_id(id) {
                ctx.service.get_worker(id).await?
            } else {
                ctx.service.get_worker_by_username(id).await?
            };
            output(&worker, flags.format)
        }
        WorkerCommands::Update {
            id,
            username,
            first_name,
            last_name,
            email,
            position,
        } => {
            let fields = [username, first_name, last_name, email, position];
            if fields.iter().all(|field| field.is_none()) {
                anyhow::bail!(
                    "At least one of --username, --first-name, --last-name, --email, or --position must be provided"
                );
            }

            let mut builder = WorkerUpdateBuilder::new();
            if let Some(username) = username {
                builder = builder.username(username);
            }
            if let Some(first_name) = first_name {
                builder = builder.first_name(first_name);
            }
            if let Some(last_name) = last_name {
                builder = builder.last_name(last_name);
            }
            if let Some(email) = email {
                builder = builder.email(email);
            }
            if let Some(position) = position {
                builder = builder.position_id(position);
            }

            let worker = ctx.service.update_worker(id, builder.build()).await?;
            output(&worker, flags.format)
        }
        WorkerCommands::Delete { id } => {
            ctx.service.delete_worker(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        WorkerCommands::Tasks { id } => {
            let split = ctx.service.worker_tasks(id).await?;
            output(&split, flags.format)
        }
    }
}

/// `tk worker get` accepts either a worker ID or a username.
fn is_worker_id(value: &str) -> bool {
    value
        .strip_prefix(PREFIX_WORKER)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

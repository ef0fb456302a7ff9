use tk_core::enums::Priority;
use tk_db::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub task_type: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = TaskUpdateBuilder::new();
    if let Some(name) = params.name {
        builder = builder.name(name);
    }
    if let Some(description) = params.description {
        builder = builder.description(description);
    }
    if let Some(deadline) = params.deadline.as_deref() {
        builder = builder.deadline(parse_date(deadline, "deadline")?);
    }
    if let Some(priority) = params.priority.as_deref() {
        builder = builder.priority(parse_enum::<Priority>(priority, "priority")?);
    }
    if let Some(task_type) = params.task_type {
        builder = builder.task_type_id(task_type);
    }

    let task = ctx.service.update_task(&params.id, builder.build()).await?;
    output(&task, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.name.is_none()
        && params.description.is_none()
        && params.deadline.is_none()
        && params.priority.is_none()
        && params.task_type.is_none()
    {
        anyhow::bail!(
            "At least one of --name, --description, --deadline, --priority, or --task-type must be provided"
        );
    }
    Ok(())
}

use tk_core::entities::NewTask;
use tk_core::enums::Priority;

use crate::cli::GlobalFlags;
use crate::commands::shared::clock;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub name: String,
    pub description: String,
    pub deadline: String,
    pub priority: Option<String>,
    pub task_type: String,
    pub assignees: Vec<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deadline = parse_date(&params.deadline, "deadline")?;
    let priority = match params.priority.as_deref() {
        Some(raw) => parse_enum::<Priority>(raw, "priority")?,
        None => ctx.config.general.default_priority,
    };

    let task = ctx
        .service
        .create_task(
            NewTask {
                name: params.name,
                description: params.description,
                deadline,
                priority,
                task_type_id: params.task_type,
                assignees: params.assignees,
            },
            clock::today(),
        )
        .await?;
    output(&task, flags.format)
}

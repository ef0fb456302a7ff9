use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// List a task's assignees, or replace them when `set` is given.
pub async fn run(
    id: &str,
    set: Option<&[String]>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(worker_ids) = set {
        ctx.service.set_assignees(id, worker_ids).await?;
    }
    let workers = ctx.service.assignees_of(id).await?;
    output(&workers, flags.format)
}

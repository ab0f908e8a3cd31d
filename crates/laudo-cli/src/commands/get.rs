use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `laudo get`.
pub async fn handle(args: &GetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .client
        .get_audit(&args.id)
        .await
        .with_context(|| format!("failed to fetch audit {}", args.id))?;
    output::output(&record, flags.format)
}

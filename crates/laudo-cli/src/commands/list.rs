use anyhow::Context;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{self, audit::AuditRow};

/// Handle `laudo list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = flags.limit.unwrap_or(ctx.config.general.default_limit);
    let list = ctx
        .client
        .list_audits(limit, args.offset)
        .await
        .context("failed to list audits")?;

    if flags.format == OutputFormat::Table {
        let rows = list.audits.iter().map(AuditRow::from).collect::<Vec<_>>();
        output::output(&rows, flags.format)
    } else {
        output::output(&list, flags.format)
    }
}

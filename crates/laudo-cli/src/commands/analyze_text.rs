use anyhow::{Context, anyhow};
use laudo_core::TextAuditRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeTextArgs;
use crate::commands::analyze::print_result;
use crate::context::AppContext;
use crate::progress::Progress;

/// Handle `laudo analyze-text`.
pub async fn handle(
    args: &AnalyzeTextArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let official = tokio::fs::read_to_string(&args.official)
        .await
        .with_context(|| format!("failed to read {}", args.official.display()))?;
    let auditor = tokio::fs::read_to_string(&args.auditor)
        .await
        .with_context(|| format!("failed to read {}", args.auditor.display()))?;
    let request = TextAuditRequest::new(
        official.trim(),
        auditor.trim(),
        &args.meta.patient_name,
        &args.meta.exam_type,
        &args.meta.exam_date,
    );

    let spinner = Progress::spinner("Comparing report texts");
    match ctx.client.create_text_audit(&request).await {
        Ok(result) => {
            spinner.finish_clear();
            print_result(&result, flags)
        }
        Err(error) => {
            spinner.finish_err("audit failed");
            tracing::debug!(%error, "text audit failed");
            Err(anyhow!(error.user_message()))
        }
    }
}

use anyhow::{Context, bail};
use laudo_client::{AuditSession, FALLBACK_UNKNOWN_ERROR, Submission};
use laudo_core::{AuditRequest, AuditResult, ReportFile};

use crate::cli::root_commands::AnalyzeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;
use crate::progress::Progress;

/// Handle `laudo analyze`.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let official = ReportFile::from_path(&args.official_pdf)
        .await
        .context("official report")?;
    let auditor = ReportFile::from_path(&args.auditor_pdf)
        .await
        .context("auditor report")?;
    let request = AuditRequest::new(official, auditor)
        .with_patient_name(args.meta.patient_name.clone())
        .with_exam_type(args.meta.exam_type.clone())
        .with_exam_date(args.meta.exam_date.clone());

    let session = AuditSession::new(ctx.client.clone());
    let spinner = Progress::spinner("Comparing reports");

    let outcome = tokio::select! {
        outcome = session.analyze_reports(&request) => outcome,
        _ = tokio::signal::ctrl_c() => {
            spinner.finish_err("cancelled");
            bail!("audit cancelled");
        }
    };

    match outcome {
        Submission::Completed(result) => {
            spinner.finish_clear();
            print_result(&result, flags)
        }
        Submission::Failed(_) | Submission::Superseded => {
            spinner.finish_err("audit failed");
            let message = session
                .error()
                .unwrap_or_else(|| FALLBACK_UNKNOWN_ERROR.to_string());
            bail!(message)
        }
    }
}

/// Print an audit result: a sectioned view for tables, the JSON shape otherwise.
pub fn print_result(result: &AuditResult, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        println!("{}", output::audit::render_result(result, output::table_options()));
        Ok(())
    } else {
        output::output(result, flags.format)
    }
}

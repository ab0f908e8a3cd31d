use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct SavedReport {
    audit_id: String,
    path: String,
    bytes: usize,
}

/// Handle `laudo report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Downloading report");
    let bytes = match ctx.client.download_report(&args.id).await {
        Ok(bytes) => bytes,
        Err(error) => {
            spinner.finish_err("download failed");
            return Err(error).with_context(|| format!("failed to download report {}", args.id));
        }
    };

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(&args.id));
    write_report(&path, &bytes)?;
    spinner.finish_ok("report saved");

    output::output(
        &SavedReport {
            audit_id: args.id.clone(),
            path: path.display().to_string(),
            bytes: bytes.len(),
        },
        flags.format,
    )
}

/// `relatorio_<id>.pdf` in the working directory; path separators in the id
/// are replaced.
fn default_report_path(audit_id: &str) -> PathBuf {
    let safe = audit_id.replace(['/', '\\'], "_");
    PathBuf::from(format!("relatorio_{safe}.pdf"))
}

fn write_report(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

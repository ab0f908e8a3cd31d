use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compare an official report PDF against an auditor report PDF.
    Analyze(AnalyzeArgs),
    /// Compare two reports from already-extracted text files.
    AnalyzeText(AnalyzeTextArgs),
    /// List stored audits, newest first.
    List(ListArgs),
    /// Show one stored audit.
    Get(GetArgs),
    /// Download the PDF report of a stored audit.
    Report(ReportArgs),
    /// Check that the audit backend is up.
    Health,
}

/// Patient metadata shared by both audit commands. Empty values are sent
/// as the backend's placeholder.
#[derive(Clone, Debug, Args)]
pub struct AuditMetaArgs {
    /// Patient name
    #[arg(long, default_value = "")]
    pub patient_name: String,

    /// Exam type (e.g., "Tomografia de tórax")
    #[arg(long, default_value = "")]
    pub exam_type: String,

    /// Exam date, sent verbatim; omitted when empty
    #[arg(long, default_value = "")]
    pub exam_date: String,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Official report PDF
    pub official_pdf: PathBuf,

    /// Auditor report PDF
    pub auditor_pdf: PathBuf,

    #[command(flatten)]
    pub meta: AuditMetaArgs,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeTextArgs {
    /// Text file with the official report
    #[arg(long)]
    pub official: PathBuf,

    /// Text file with the auditor report
    #[arg(long)]
    pub auditor: PathBuf,

    #[command(flatten)]
    pub meta: AuditMetaArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Number of audits to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    /// Audit id
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Audit id
    pub id: String,

    /// Where to write the PDF (default: relatorio_<id>.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

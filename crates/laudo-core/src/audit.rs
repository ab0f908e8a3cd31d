//! Audit results and stored audit records.
//!
//! `classification` and `severity` are kept as opaque strings. The backend
//! decides their vocabulary and the client only displays them.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AuditResult
// ---------------------------------------------------------------------------

/// Structured comparison returned by a successful audit submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub success: bool,
    #[serde(default)]
    pub audit_id: Option<String>,
    pub classification: String,
    pub summary: String,
    pub concordant_findings: Vec<String>,
    /// Presentation order.
    pub discrepancies: Vec<Discrepancy>,
    pub has_critical_alert: bool,
    /// Expected when `has_critical_alert` is set; not enforced.
    #[serde(default)]
    pub critical_alert_text: Option<String>,
    #[serde(default)]
    pub technical_note: Option<String>,
    #[serde(default)]
    pub report_url: Option<String>,
    pub extracted_texts: ExtractedTexts,
}

impl AuditResult {
    /// Critical alert text, if the backend flagged one.
    #[must_use]
    pub fn critical_alert(&self) -> Option<&str> {
        if self.has_critical_alert {
            self.critical_alert_text.as_deref()
        } else {
            None
        }
    }
}

/// One disagreement between the official and the auditor report.
///
/// Discrepancies are model-generated and passed through by the backend
/// unchecked, so every field defaults to empty when missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discrepancy {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub description: String,
    pub official_says: String,
    pub auditor_says: String,
}

/// Raw text the backend extracted from each PDF, echoed back for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedTexts {
    pub official: String,
    pub auditor: String,
}

// ---------------------------------------------------------------------------
// AuditRecord
// ---------------------------------------------------------------------------

/// A persisted audit as returned by the listing and detail routes.
///
/// Columns the client does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub exam_type: String,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub official_pdf_url: Option<String>,
    #[serde(default)]
    pub auditor_pdf_url: Option<String>,
    #[serde(default)]
    pub official_text: String,
    #[serde(default)]
    pub auditor_text: String,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub analysis_summary: Option<String>,
    #[serde(default)]
    pub concordant_findings: Vec<String>,
    #[serde(default)]
    pub discrepancies: Vec<Discrepancy>,
    #[serde(default)]
    pub has_critical_alert: bool,
    #[serde(default)]
    pub critical_alert_text: Option<String>,
    #[serde(default)]
    pub technical_note: Option<String>,
    #[serde(default)]
    pub report_pdf_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AuditRecord {
    /// Parse `created_at` as UTC.
    ///
    /// Accepts RFC 3339 and naive ISO 8601 timestamps (the latter are taken
    /// as UTC). Returns `None` when absent or unparseable.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Response of `GET /api/audits`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditList {
    pub audits: Vec<AuditRecord>,
    pub count: usize,
}

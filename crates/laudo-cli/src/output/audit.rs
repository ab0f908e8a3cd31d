//! Human-readable table views of audit results and stored audits.

use laudo_core::{AuditRecord, AuditResult, Discrepancy};
use serde::Serialize;

use super::table::{TableOptions, render_table};

/// Render an audit result as a summary block followed by the concordant
/// findings and a discrepancy table.
#[must_use]
pub fn render_result(result: &AuditResult, options: TableOptions) -> String {
    let mut summary = vec![
        row("classification", &result.classification),
        row("summary", &result.summary),
        row("audit_id", result.audit_id.as_deref().unwrap_or("-")),
    ];
    if let Some(alert) = result.critical_alert() {
        summary.push(row("critical_alert", alert));
    } else if result.has_critical_alert {
        summary.push(row("critical_alert", "true"));
    }
    if let Some(note) = &result.technical_note {
        summary.push(row("technical_note", note));
    }
    if let Some(url) = &result.report_url {
        summary.push(row("report_url", url));
    }

    let mut sections = vec![render_table(&["field", "value"], &summary, options)];

    if !result.concordant_findings.is_empty() {
        let findings = result
            .concordant_findings
            .iter()
            .enumerate()
            .map(|(i, finding)| vec![(i + 1).to_string(), finding.clone()])
            .collect::<Vec<_>>();
        sections.push(render_table(&["#", "concordant finding"], &findings, options));
    }

    if !result.discrepancies.is_empty() {
        sections.push(render_discrepancies(&result.discrepancies, options));
    }

    sections.join("\n\n")
}

fn render_discrepancies(discrepancies: &[Discrepancy], options: TableOptions) -> String {
    let rows = discrepancies
        .iter()
        .enumerate()
        .map(|(i, d)| {
            vec![
                (i + 1).to_string(),
                d.severity.clone(),
                d.kind.clone(),
                d.description.clone(),
                d.official_says.clone(),
                d.auditor_says.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &["#", "severity", "type", "description", "official", "auditor"],
        &rows,
        options,
    )
}

fn row(field: &str, value: &str) -> Vec<String> {
    vec![field.to_string(), value.to_string()]
}

/// One line of `laudo list`.
#[derive(Debug, Serialize)]
pub struct AuditRow {
    pub id: String,
    pub created_at: String,
    pub patient_name: String,
    pub exam_type: String,
    pub classification: String,
    pub critical: bool,
}

impl From<&AuditRecord> for AuditRow {
    fn from(record: &AuditRecord) -> Self {
        Self {
            id: record.id.clone(),
            created_at: record.created_at_utc().map_or_else(
                || record.created_at.clone().unwrap_or_else(|| "-".into()),
                |ts| ts.format("%Y-%m-%d %H:%M").to_string(),
            ),
            patient_name: record.patient_name.clone(),
            exam_type: record.exam_type.clone(),
            classification: record.classification.clone().unwrap_or_else(|| "-".into()),
            critical: record.has_critical_alert,
        }
    }
}

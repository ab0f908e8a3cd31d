//! Audit routes: submission, listing, detail and report download.

use laudo_core::request::{PDF_MIME, fields};
use laudo_core::{AuditList, AuditRecord, AuditRequest, AuditResult, ReportFile, TextAuditRequest};
use reqwest::multipart::{Form, Part};

use crate::http::{check_response, decode_json};
use crate::{AuditClient, error::AuditError};

impl AuditClient {
    /// Submit two PDF reports for comparison via `POST /api/audits`.
    ///
    /// Sends one multipart request and makes a single attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a valid [`AuditResult`].
    pub async fn create_audit(&self, request: &AuditRequest) -> Result<AuditResult, AuditError> {
        let url = self.api.endpoint("/api/audits");
        let form = audit_form(request)?;
        tracing::debug!(
            %url,
            official_bytes = request.official_pdf.len(),
            auditor_bytes = request.auditor_pdf.len(),
            "submitting audit"
        );
        let resp = check_response(self.http.post(&url).multipart(form).send().await?).await?;
        decode_json(resp).await
    }

    /// Submit already-extracted report texts via `POST /api/audits/text`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a valid [`AuditResult`].
    pub async fn create_text_audit(
        &self,
        request: &TextAuditRequest,
    ) -> Result<AuditResult, AuditError> {
        let url = self.api.endpoint("/api/audits/text");
        let resp = check_response(self.http.post(&url).json(request).send().await?).await?;
        decode_json(resp).await
    }

    /// List stored audits, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_audits(&self, limit: u32, offset: u32) -> Result<AuditList, AuditError> {
        let url = format!(
            "{}?limit={limit}&offset={offset}",
            self.api.endpoint("/api/audits")
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp).await
    }

    /// Fetch one stored audit by id.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Api`] with status 404 if the audit does not
    /// exist, or another [`AuditError`] on transport and parse failures.
    pub async fn get_audit(&self, audit_id: &str) -> Result<AuditRecord, AuditError> {
        let url = self
            .api
            .endpoint(&format!("/api/audits/{}", urlencoding::encode(audit_id)));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp).await
    }

    /// Download the regenerated PDF report of a stored audit.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Api`] with status 404 if the audit does not
    /// exist, or [`AuditError::Transport`] if the body cannot be read.
    pub async fn download_report(&self, audit_id: &str) -> Result<Vec<u8>, AuditError> {
        let url = self.api.endpoint(&format!(
            "/api/audits/{}/report",
            urlencoding::encode(audit_id)
        ));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Build the multipart body: both files first, then the defaulted text
/// fields (`exam_date` only when non-empty).
fn audit_form(request: &AuditRequest) -> Result<Form, AuditError> {
    let mut form = Form::new()
        .part(fields::OFFICIAL_PDF, pdf_part(&request.official_pdf)?)
        .part(fields::AUDITOR_PDF, pdf_part(&request.auditor_pdf)?);
    for (name, value) in request.text_fields() {
        form = form.text(name, value);
    }
    Ok(form)
}

fn pdf_part(file: &ReportFile) -> Result<Part, AuditError> {
    Ok(Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(PDF_MIME)?)
}

//! Audit submission requests.
//!
//! The backend reads five multipart fields. Two metadata fields fall back to
//! [`NOT_INFORMED`] when left empty, and `exam_date` is omitted entirely when
//! empty because its presence is meaningful to the backend.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Placeholder sent for patient name and exam type when none was given.
pub const NOT_INFORMED: &str = "Não informado";

/// Multipart field names of `POST /api/audits`.
pub mod fields {
    pub const OFFICIAL_PDF: &str = "official_pdf";
    pub const AUDITOR_PDF: &str = "auditor_pdf";
    pub const PATIENT_NAME: &str = "patient_name";
    pub const EXAM_TYPE: &str = "exam_type";
    pub const EXAM_DATE: &str = "exam_date";
}

/// Content type attached to both file parts.
pub const PDF_MIME: &str = "application/pdf";

/// An in-memory report file, sent as one multipart file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a report from disk, keeping its file name for the upload.
    ///
    /// The contents are not inspected; type and size checks belong to the
    /// backend.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "laudo.pdf".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Two reports plus patient metadata, as submitted to `POST /api/audits`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    pub official_pdf: ReportFile,
    pub auditor_pdf: ReportFile,
    pub patient_name: String,
    pub exam_type: String,
    pub exam_date: String,
}

impl AuditRequest {
    #[must_use]
    pub const fn new(official_pdf: ReportFile, auditor_pdf: ReportFile) -> Self {
        Self {
            official_pdf,
            auditor_pdf,
            patient_name: String::new(),
            exam_type: String::new(),
            exam_date: String::new(),
        }
    }

    #[must_use]
    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = name.into();
        self
    }

    #[must_use]
    pub fn with_exam_type(mut self, exam_type: impl Into<String>) -> Self {
        self.exam_type = exam_type.into();
        self
    }

    #[must_use]
    pub fn with_exam_date(mut self, date: impl Into<String>) -> Self {
        self.exam_date = date.into();
        self
    }

    /// Text fields in send order, with defaults applied and `exam_date`
    /// dropped when empty.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            (fields::PATIENT_NAME, or_not_informed(&self.patient_name)),
            (fields::EXAM_TYPE, or_not_informed(&self.exam_type)),
        ];
        if !self.exam_date.is_empty() {
            out.push((fields::EXAM_DATE, self.exam_date.clone()));
        }
        out
    }
}

/// JSON body of `POST /api/audits/text`, for reports whose text was already
/// extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAuditRequest {
    pub official_text: String,
    pub auditor_text: String,
    pub patient_name: String,
    pub exam_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,
}

impl TextAuditRequest {
    /// Build a text audit request using the same defaulting rules as the
    /// multipart form.
    #[must_use]
    pub fn new(
        official_text: impl Into<String>,
        auditor_text: impl Into<String>,
        patient_name: &str,
        exam_type: &str,
        exam_date: &str,
    ) -> Self {
        Self {
            official_text: official_text.into(),
            auditor_text: auditor_text.into(),
            patient_name: or_not_informed(patient_name),
            exam_type: or_not_informed(exam_type),
            exam_date: (!exam_date.is_empty()).then(|| exam_date.to_string()),
        }
    }
}

fn or_not_informed(value: &str) -> String {
    if value.is_empty() {
        NOT_INFORMED.to_string()
    } else {
        value.to_string()
    }
}

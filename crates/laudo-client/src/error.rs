//! Audit client error types.

use thiserror::Error;

/// Shown when the backend rejects a request without a usable `detail`.
pub const FALLBACK_API_ERROR: &str = "Erro ao processar auditoria";

/// Shown when a failure carries no message at all.
pub const FALLBACK_UNKNOWN_ERROR: &str = "Erro desconhecido";

/// Errors that can occur when talking to the audit backend.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The request could not be completed (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {}", detail.as_deref().unwrap_or(FALLBACK_API_ERROR))]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The `detail` field of the error body, if there was one.
        detail: Option<String>,
    },

    /// A success response whose body is not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl AuditError {
    /// The display string stored in a session's `error` cell.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(error) => non_empty_or(error.to_string(), FALLBACK_UNKNOWN_ERROR),
            Self::Api { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| FALLBACK_API_ERROR.to_string()),
            Self::Decode(message) => non_empty_or(message.clone(), FALLBACK_UNKNOWN_ERROR),
        }
    }

    /// HTTP status of an API error, `None` for other kinds.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_uses_detail() {
        let err = AuditError::Api {
            status: 422,
            detail: Some("invalid PDF".into()),
        };
        assert_eq!(err.user_message(), "invalid PDF");
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "API error (422): invalid PDF");
    }

    #[test]
    fn api_error_without_detail_uses_fallback() {
        let err = AuditError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), FALLBACK_API_ERROR);
        assert_eq!(err.to_string(), "API error (500): Erro ao processar auditoria");
    }

    #[test]
    fn empty_decode_message_uses_unknown_fallback() {
        assert_eq!(
            AuditError::Decode(String::new()).user_message(),
            FALLBACK_UNKNOWN_ERROR
        );
        assert_eq!(
            AuditError::Decode("expected value at line 1 column 1".into()).user_message(),
            "expected value at line 1 column 1"
        );
    }
}

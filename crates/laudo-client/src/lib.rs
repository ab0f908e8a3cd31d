//! # laudo-client
//!
//! HTTP client and submission state for the LaudoSync audit backend.
//!
//! - [`AuditClient`] speaks the backend's routes (multipart audit
//!   submission, text audits, listing, detail, report download, health).
//! - [`AuditSession`] wraps a transport with the observable
//!   `loading`/`error`/`result` cells a view renders from.
//!
//! The backend URL is always injected through [`ApiConfig`]; nothing in this
//! crate reads the environment.

mod audits;
mod error;
mod http;
mod service;
pub mod session;

pub use error::{AuditError, FALLBACK_API_ERROR, FALLBACK_UNKNOWN_ERROR};
pub use laudo_config::ApiConfig;
pub use session::{AuditSession, AuditState, Submission};

use std::future::Future;

use laudo_core::{AuditRequest, AuditResult};

// ── Transport ──────────────────────────────────────────────────────

/// Something that can submit an audit and return its result.
///
/// [`AuditClient`] is the production implementation; sessions are generic
/// over this trait so tests can script responses.
pub trait AuditTransport: Send + Sync {
    fn submit_audit(
        &self,
        request: &AuditRequest,
    ) -> impl Future<Output = Result<AuditResult, AuditError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the audit backend.
#[derive(Debug, Clone)]
pub struct AuditClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl AuditClient {
    /// Create a client for the backend described by `api`.
    ///
    /// No request timeout is set: audits include server-side PDF extraction
    /// and model calls, and the client waits for them to finish.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Transport`] if the underlying `reqwest::Client`
    /// fails to build (e.g., TLS backend initialization).
    pub fn new(api: ApiConfig) -> Result<Self, AuditError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("laudosync/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(api, http))
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_http(api: ApiConfig, http: reqwest::Client) -> Self {
        Self { http, api }
    }

    #[must_use]
    pub const fn api(&self) -> &ApiConfig {
        &self.api
    }
}

impl AuditTransport for AuditClient {
    async fn submit_audit(&self, request: &AuditRequest) -> Result<AuditResult, AuditError> {
        self.create_audit(request).await
    }
}

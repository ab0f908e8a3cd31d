//! Service status routes.

use laudo_core::{HealthStatus, ServiceInfo};

use crate::http::{check_response, decode_json};
use crate::{AuditClient, error::AuditError};

impl AuditClient {
    /// Query `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthStatus, AuditError> {
        let url = self.api.endpoint("/health");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp).await
    }

    /// Query `GET /` for service name and version.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] if the backend is unreachable or the response
    /// cannot be parsed.
    pub async fn service_info(&self) -> Result<ServiceInfo, AuditError> {
        let url = self.api.endpoint("/");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp).await
    }
}

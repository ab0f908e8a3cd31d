//! Shared HTTP response helpers.
//!
//! Every route shares the same failure shape: a non-success status with a
//! JSON body carrying `detail`.

use laudo_core::ErrorBody;
use serde::de::DeserializeOwned;

use crate::error::AuditError;

/// Check an HTTP response status.
///
/// Returns the response unchanged on success. Any other status becomes
/// [`AuditError::Api`], with `detail` taken from the JSON body when present.
/// Empty or non-JSON bodies leave `detail` unset.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AuditError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.bytes().await.unwrap_or_default();
    let detail = ErrorBody::parse(&body).and_then(|b| b.detail_message());
    Err(AuditError::Api { status, detail })
}

/// Read a success body and deserialize it as JSON.
///
/// Body read failures are transport errors; bodies that are not valid JSON
/// for `T` become [`AuditError::Decode`].
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AuditError> {
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| AuditError::Decode(e.to_string()))
}

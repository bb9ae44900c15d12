//! Shared HTTP response helpers for the backend endpoints.
//!
//! Centralizes status-code checks (non-success → [`ApiError::Status`] with the
//! body's `detail` extracted) so endpoint modules stay focused on request
//! construction and response mapping.

use serde::de::DeserializeOwned;
use wikiquiz_core::responses::ErrorBody;

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. On failure the body is read
/// once and its `detail` field, if any, is kept for display.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = ErrorBody::detail_from(&body);
    tracing::debug!(status = status.as_u16(), ?detail, "backend returned error status");
    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

/// Check the status, then decode the JSON body.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    check_response(resp)
        .await?
        .json::<T>()
        .await
        .map_err(ApiError::from_body)
}

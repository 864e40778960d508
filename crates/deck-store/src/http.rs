//! Shared HTTP response helpers for the REST backend.
//!
//! Centralizes status-code checks (401/403 → not authenticated, 429 with
//! `Retry-After` parsing, non-success → [`StoreError::Api`]) so request code
//! stays focused on URLs and payloads.

use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status == 401 || status == 403 {
        return Err(StoreError::NotAuthenticated);
    }
    if status == 429 {
        return Err(StoreError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Decode a JSON body into `T`, reporting decode failures as [`StoreError::Parse`].
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, StoreError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse(e.to_string()))
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// The backend's `message` field when the body is a JSON error object.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

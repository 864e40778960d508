//! Store error types.

use deck_core::errors::ValidationError;
use thiserror::Error;

/// Errors raised by the data source adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A response or cache file could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Local snapshot cache I/O failure.
    #[error("cache error: {0}")]
    Cache(String),

    /// Input rejected before any backend call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend rejected the access token.
    #[error("not authenticated — run `deck auth login`")]
    NotAuthenticated,

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl StoreError {
    /// Whether the error came from input validation rather than I/O.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

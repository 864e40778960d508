use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `deck auth login`")]
    NotAuthenticated,

    #[error("session expired — run `deck auth login` again")]
    TokenExpired,

    /// The identity service rejected the request.
    #[error("identity service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    /// A token or response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl AuthError {
    /// Whether the stored session should be discarded.
    #[must_use]
    pub const fn is_auth_rejection(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::TokenExpired | Self::Api { status: 400 | 401 | 403, .. }
        )
    }
}

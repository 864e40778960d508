use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// Unverified claims read from an access token payload.
///
/// Signature checks are the backend's job; the client only needs the owner id
/// and expiry to decide whether to refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// User id (`sub` claim).
    pub user_id: String,
    pub email: Option<String>,
    /// Expiration time (`exp` claim).
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    exp: i64,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT without verifying it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Decode` for a malformed token or missing claims.
    pub fn decode(jwt: &str) -> Result<Self, AuthError> {
        let mut parts = jwt.split('.');
        let (Some(_), Some(payload), Some(_), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::Decode("invalid JWT format".into()));
        };
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::Decode(format!("base64 decode failed: {e}")))?;
        let raw: RawClaims = serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::Decode(format!("claims parse failed: {e}")))?;
        let expires_at = DateTime::from_timestamp(raw.exp, 0)
            .ok_or_else(|| AuthError::Decode("invalid exp timestamp".into()))?;
        Ok(Self {
            user_id: raw.sub,
            email: raw.email,
            expires_at,
        })
    }

    /// Expired, or expiring within `buffer_secs` of `now`.
    #[must_use]
    pub fn is_near_expiry(&self, now: DateTime<Utc>, buffer_secs: i64) -> bool {
        self.expires_at <= now + TimeDelta::seconds(buffer_secs)
    }
}

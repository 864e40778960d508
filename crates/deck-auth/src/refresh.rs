use chrono::{DateTime, Utc};

use crate::client::AuthClient;
use crate::error::AuthError;
use crate::session::{EXPIRY_BUFFER_SECS, Session};
use crate::token_store::{self, TokenSource};

/// What to do with a loaded session before using it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Valid,
    NeedsRefresh,
    Expired,
}

/// Classify a session against `now` using the 60 s expiry buffer.
#[must_use]
pub fn freshness(session: &Session, now: DateTime<Utc>) -> Freshness {
    if !session.is_near_expiry(now) {
        Freshness::Valid
    } else if session.can_refresh() {
        Freshness::NeedsRefresh
    } else {
        Freshness::Expired
    }
}

/// Load the stored session, refreshing and re-storing it when near expiry.
///
/// Returns `Ok(None)` when nobody is signed in.
///
/// # Errors
///
/// Returns `AuthError::TokenExpired` when the session cannot be refreshed.
pub async fn resolve_session(client: &AuthClient) -> Result<Option<Session>, AuthError> {
    let Some((session, source)) = token_store::load() else {
        return Ok(None);
    };

    match freshness(&session, Utc::now()) {
        Freshness::Valid => Ok(Some(session)),
        Freshness::Expired => {
            tracing::warn!(
                expires_at = %session.expires_at,
                source = source.as_str(),
                "session expired and cannot be refreshed",
            );
            Err(AuthError::TokenExpired)
        }
        Freshness::NeedsRefresh => {
            tracing::debug!(
                expires_at = %session.expires_at,
                "session expires within {EXPIRY_BUFFER_SECS}s; refreshing",
            );
            let refreshed = client.refresh(&session.refresh_token).await?;
            if source != TokenSource::Env {
                token_store::store(&refreshed)?;
            }
            Ok(Some(refreshed))
        }
    }
}

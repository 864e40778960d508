//! # deck-auth
//!
//! Hosted identity for the taskdeck CLI.
//!
//! Provides email/password sign-in and sign-up against the identity service,
//! refresh-token rotation, profile updates, and session storage in the OS
//! keychain (`keyring`) with a private credentials-file fallback.

pub mod claims;
pub mod client;
pub mod error;
pub mod refresh;
pub mod session;
pub mod token_store;

pub use claims::TokenClaims;
pub use client::AuthClient;
pub use error::AuthError;
pub use session::{Session, SignUpOutcome};

/// Load the stored session without contacting the identity service.
#[must_use]
pub fn resolve_stored() -> Option<Session> {
    token_store::load().map(|(session, _)| session)
}

/// Load the stored session, refreshing it when near expiry.
///
/// # Errors
///
/// Returns `AuthError` if a needed refresh fails.
pub async fn resolve_and_refresh(client: &AuthClient) -> Result<Option<Session>, AuthError> {
    refresh::resolve_session(client).await
}

/// Revoke the session server-side (best effort) and clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub async fn logout(client: &AuthClient) -> Result<(), AuthError> {
    if let Some(session) = resolve_stored()
        && let Err(error) = client.sign_out(&session.access_token).await
    {
        tracing::warn!(%error, "server-side sign-out failed; clearing local session anyway");
    }
    token_store::delete()
}

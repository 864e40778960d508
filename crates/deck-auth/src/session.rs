//! Signed-in session and the identity provider's wire shapes.

use chrono::{DateTime, TimeDelta, Utc};
use deck_core::identity::UserProfile;
use serde::{Deserialize, Serialize};

/// Refresh when the access token expires within this many seconds.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Everything needed to call the backend on a user's behalf.
///
/// Stored as JSON in the keyring (or credentials file) between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Empty when the session came from a bare token (env override).
    #[serde(default)]
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

impl Session {
    #[must_use]
    pub fn owner_id(&self) -> &str {
        &self.user.id
    }

    #[must_use]
    pub fn is_near_expiry(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now + TimeDelta::seconds(EXPIRY_BUFFER_SECS)
    }

    #[must_use]
    pub fn can_refresh(&self) -> bool {
        !self.refresh_token.is_empty()
    }
}

/// Response body of the token endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Absolute expiry in unix seconds; preferred over `expires_in` when present.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: ProviderUser,
}

impl TokenResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| self.expires_in.map(|secs| now + TimeDelta::seconds(secs)))
            .unwrap_or(now);
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user.into(),
        }
    }
}

/// The provider's user object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(crate) struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<ProviderUser> for UserProfile {
    fn from(user: ProviderUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.user_metadata.full_name,
            display_name: user.user_metadata.display_name,
            avatar_url: user.user_metadata.avatar_url,
        }
    }
}

/// Sign-up either signs the user in or waits for email confirmation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SignUpResponse {
    Session(TokenResponse),
    Pending(ProviderUser),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationRequired(UserProfile),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap()
    }

    const TOKEN_BODY: &str = r#"{
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "rt",
        "user": {
            "id": "8d0c",
            "email": "ada@example.com",
            "user_metadata": {"full_name": "Ada Lovelace", "theme": "dark"}
        }
    }"#;

    #[test]
    fn token_response_becomes_session() {
        let body: TokenResponse = serde_json::from_str(TOKEN_BODY).unwrap();
        let session = body.into_session(now());
        assert_eq!(session.expires_at, now() + TimeDelta::hours(1));
        assert_eq!(session.owner_id(), "8d0c");
        assert_eq!(session.user.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(session.user.display_name(), "Ada Lovelace");
        assert!(session.can_refresh());
    }

    #[test]
    fn sign_up_without_session_is_pending() {
        let pending: SignUpResponse =
            serde_json::from_str(r#"{"id": "u2", "email": "b@example.com"}"#).unwrap();
        assert!(matches!(pending, SignUpResponse::Pending(ref u) if u.id == "u2"));

        let signed_in: SignUpResponse = serde_json::from_str(TOKEN_BODY).unwrap();
        assert!(matches!(signed_in, SignUpResponse::Session(_)));
    }

    #[test]
    fn near_expiry_uses_sixty_second_buffer() {
        let body: TokenResponse = serde_json::from_str(TOKEN_BODY).unwrap();
        let mut session = body.into_session(now());
        assert!(!session.is_near_expiry(now()));
        session.expires_at = now() + TimeDelta::seconds(45);
        assert!(session.is_near_expiry(now()));
    }
}

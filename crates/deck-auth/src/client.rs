//! HTTP client for the hosted identity service (`{url}/auth/v1`).

use std::time::Duration;

use chrono::Utc;
use deck_core::identity::UserProfile;
use serde_json::json;

use crate::error::AuthError;
use crate::session::{ProviderUser, Session, SignUpOutcome, SignUpResponse, TokenResponse, UserMetadata};

pub struct AuthClient {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
}

impl AuthClient {
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(auth_url: impl Into<String>, anon_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("taskdeck/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            auth_url: auth_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.auth_url)
    }

    /// Email + password sign-in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` on rejected credentials, `AuthError::Http` on
    /// transport failure.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let resp = self
            .http
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body: TokenResponse = decode(check(resp).await?).await?;
        tracing::debug!(user_id = %body.user.id, "signed in");
        Ok(body.into_session(Utc::now()))
    }

    /// Create an account. `full_name` is stored as profile metadata.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` when the service rejects the sign-up.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<SignUpOutcome, AuthError> {
        let metadata = UserMetadata {
            full_name: full_name.map(str::to_string),
            ..UserMetadata::default()
        };
        let resp = self
            .http
            .post(self.endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password, "data": metadata }))
            .send()
            .await?;
        Ok(match decode(check(resp).await?).await? {
            SignUpResponse::Session(token) => SignUpOutcome::SignedIn(token.into_session(Utc::now())),
            SignUpResponse::Pending(user) => SignUpOutcome::ConfirmationRequired(user.into()),
        })
    }

    /// Exchange a refresh token for a new session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` when the refresh token is rejected.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let resp = self
            .http
            .post(self.endpoint("token?grant_type=refresh_token"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        let resp = check(resp).await.map_err(|e| {
            if e.is_auth_rejection() {
                AuthError::TokenExpired
            } else {
                e
            }
        })?;
        let body: TokenResponse = decode(resp).await?;
        Ok(body.into_session(Utc::now()))
    }

    /// Revoke the session server-side.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` on transport failure or a non-success status.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Fetch the current user's profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` when the token is rejected.
    pub async fn get_user(&self, access_token: &str) -> Result<UserProfile, AuthError> {
        let resp = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        let user: ProviderUser = decode(check(resp).await?).await?;
        Ok(user.into())
    }

    /// Set the profile's full name, mirrored into the display name.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` when the update is rejected.
    pub async fn update_profile(
        &self,
        access_token: &str,
        full_name: &str,
    ) -> Result<UserProfile, AuthError> {
        let name = full_name.trim();
        let metadata = UserMetadata {
            full_name: Some(name.to_string()),
            display_name: Some(name.to_string()),
            avatar_url: None,
        };
        let resp = self
            .http
            .put(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .json(&json!({ "data": metadata }))
            .send()
            .await?;
        let user: ProviderUser = decode(check(resp).await?).await?;
        Ok(user.into())
    }
}

/// Map non-success statuses to `AuthError::Api`, extracting the service's message.
pub(crate) async fn check(resp: reqwest::Response) -> Result<reqwest::Response, AuthError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(AuthError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Prefer the service's human-readable message fields over the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}

async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, AuthError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| AuthError::Decode(format!("response body: {e}")))
}

use std::fs;
use std::path::{Path, PathBuf};

use deck_core::identity::UserProfile;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::session::Session;

const DEFAULT_KEYRING_SERVICE: &str = "taskdeck-cli";
const KEYRING_USER: &str = "session";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Bare access token override, for CI and scripts.
pub const TOKEN_ENV_VAR: &str = "TASKDECK_AUTH__TOKEN";

/// Where the active session was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Keyring service name; `TASKDECK_KEYRING_SERVICE` overrides it for tests.
fn keyring_service() -> String {
    std::env::var("TASKDECK_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Persist a session in the OS keychain, falling back to a 0600 file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(session: &Session) -> Result<(), AuthError> {
    let json = serde_json::to_string(session)
        .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(&json) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file_at(&credentials_path()?, &json)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file_at(&credentials_path()?, &json)
        }
    }
}

/// Load the session. Priority: keyring → `TASKDECK_AUTH__TOKEN` → file.
#[must_use]
pub fn load() -> Option<(Session, TokenSource)> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(json) = entry.get_password()
        && let Some(session) = parse_session(&json)
    {
        return Some((session, TokenSource::Keyring));
    }

    if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
        && !token.trim().is_empty()
    {
        match session_from_token(token.trim()) {
            Ok(session) => return Some((session, TokenSource::Env)),
            Err(error) => tracing::warn!(%error, "ignoring {TOKEN_ENV_VAR}"),
        }
    }

    load_file_at(&credentials_path().ok()?).map(|session| (session, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

/// Build a non-refreshable session from a bare access token.
///
/// # Errors
///
/// Returns `AuthError::Decode` if the token payload cannot be read.
pub fn session_from_token(token: &str) -> Result<Session, AuthError> {
    let claims = TokenClaims::decode(token)?;
    Ok(Session {
        access_token: token.to_string(),
        refresh_token: String::new(),
        expires_at: claims.expires_at,
        user: UserProfile {
            id: claims.user_id,
            email: claims.email,
            ..UserProfile::default()
        },
    })
}

fn parse_session(json: &str) -> Option<Session> {
    if json.trim().is_empty() {
        return None;
    }
    serde_json::from_str(json)
        .inspect_err(|error| tracing::warn!(%error, "stored session is unreadable"))
        .ok()
}

// --- File helpers ---

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".taskdeck").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found — cannot store credentials".into())
        })
}

fn store_file_at(path: &Path, contents: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, contents)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }
    Ok(())
}

fn load_file_at(path: &Path) -> Option<Session> {
    fs::read_to_string(path).ok().and_then(|s| parse_session(&s))
}

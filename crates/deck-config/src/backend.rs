//! Hosted backend (REST + identity) connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abcd.supabase.co`.
    #[serde(default)]
    pub url: String,

    /// Public anonymous API key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    fn base(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Table endpoint root: `{url}/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base())
    }

    /// Identity endpoint root: `{url}/auth/v1`.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.base())
    }

    /// Fail with a hint naming the env vars when the section is unset.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "backend".into(),
                hint: "TASKDECK_BACKEND__URL and TASKDECK_BACKEND__ANON_KEY".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_not_configured() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 10);
        assert!(matches!(
            config.require(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn endpoint_roots_strip_trailing_slash() {
        let config = BackendConfig {
            url: "https://abcd.example.co/".into(),
            anon_key: "anon".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.rest_url(), "https://abcd.example.co/rest/v1");
        assert_eq!(config.auth_url(), "https://abcd.example.co/auth/v1");
    }
}

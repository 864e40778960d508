//! # deck-config
//!
//! Layered configuration loading for taskdeck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKDECK_*` prefix, `__` as separator)
//! 2. Project-level `.taskdeck/config.toml`
//! 3. User-level `~/.config/taskdeck/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TASKDECK_BACKEND__URL` -> `backend.url`,
//! `TASKDECK_GENERAL__UPCOMING_DAYS` -> `general.upcoming_days`, etc.
//!
//! ```no_run
//! use deck_config::DeckConfig;
//!
//! let config = DeckConfig::load_with_dotenv().expect("config");
//! if config.backend.is_configured() {
//!     println!("REST root: {}", config.backend.rest_url());
//! }
//! ```

mod backend;
mod cache;
mod error;
mod general;

pub use backend::BackendConfig;
pub use cache::CacheConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for every environment override.
pub const ENV_PREFIX: &str = "TASKDECK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeckConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The standard provider chain.
    pub fn figment() -> Figment {
        Self::figment_from(
            Self::global_config_path().as_deref(),
            Path::new(".taskdeck/config.toml"),
        )
    }

    /// Provider chain over explicit file locations. Missing files are skipped.
    pub fn figment_from(global: Option<&Path>, project: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global));
        }
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskdeck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_unconfigured() {
        let config = DeckConfig::default();
        assert!(!config.backend.is_configured());
        assert!(config.cache.enabled);
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn figment_without_files_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let figment = DeckConfig::figment_from(None, &dir.path().join("missing.toml"));
        let config: DeckConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.general.upcoming_days, 7);
        assert_eq!(config.backend.timeout_secs, 10);
    }
}

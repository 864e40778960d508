//! Local snapshot cache settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Cache directory. Empty means the platform cache dir joined with `taskdeck`.
    #[serde(default)]
    pub dir: String,

    /// When false, fetch failures surface as errors instead of serving the snapshot.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            enabled: default_enabled(),
        }
    }
}

impl CacheConfig {
    /// Effective cache directory, or `None` when no platform cache dir exists.
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        let dir = self.dir.trim();
        if dir.is_empty() {
            dirs::cache_dir().map(|p| p.join("taskdeck"))
        } else {
            Some(PathBuf::from(dir))
        }
    }
}

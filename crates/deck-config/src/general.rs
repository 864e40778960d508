//! Dashboard behaviour settings.

use deck_core::schedule::{DEFAULT_DUE_SOON_MINUTES, DEFAULT_UPCOMING_DAYS};
use deck_core::sort::SortKey;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_sort() -> String {
    SortKey::default().as_str().to_string()
}

/// Upper bound for the due-soon window: one year of minutes.
pub const MAX_DUE_SOON_MINUTES: i64 = 60 * 24 * 365;

const fn default_due_soon_minutes() -> i64 {
    DEFAULT_DUE_SOON_MINUTES
}

const fn default_upcoming_days() -> u32 {
    DEFAULT_UPCOMING_DAYS
}

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Sort key applied when `--sort` is not given.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// "Due soon" look-ahead in minutes.
    #[serde(default = "default_due_soon_minutes")]
    pub due_soon_minutes: i64,

    /// "Upcoming" horizon in calendar days.
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            due_soon_minutes: default_due_soon_minutes(),
            upcoming_days: default_upcoming_days(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// Parsed [`Self::default_sort`].
    pub fn sort_key(&self) -> Result<SortKey, ConfigError> {
        self.default_sort
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: "general.default_sort".into(),
                reason: format!(
                    "'{}' is not one of due_at, priority, created_at",
                    self.default_sort
                ),
            })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sort_key()?;
        if self.due_soon_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.due_soon_minutes".into(),
                reason: "must be positive".into(),
            });
        }
        if self.due_soon_minutes > MAX_DUE_SOON_MINUTES {
            return Err(ConfigError::InvalidValue {
                field: "general.due_soon_minutes".into(),
                reason: format!("must be at most {MAX_DUE_SOON_MINUTES} (one year)"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_sort, "due_at");
        assert_eq!(config.due_soon_minutes, 120);
        assert_eq!(config.upcoming_days, 7);
        assert_eq!(config.default_limit, 50);
        assert!(config.validate().is_ok());
        assert_eq!(config.sort_key().unwrap(), SortKey::DueAt);
    }

    #[test]
    fn rejects_unknown_sort_and_non_positive_window() {
        let bad_sort = GeneralConfig {
            default_sort: "title".into(),
            ..Default::default()
        };
        assert!(matches!(
            bad_sort.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.default_sort"
        ));

        let bad_window = GeneralConfig {
            due_soon_minutes: 0,
            ..Default::default()
        };
        assert!(bad_window.validate().is_err());
    }

    #[test]
    fn rejects_window_longer_than_a_year() {
        let at_limit = GeneralConfig {
            due_soon_minutes: MAX_DUE_SOON_MINUTES,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let huge = GeneralConfig {
            due_soon_minutes: 140_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.due_soon_minutes"
        ));
    }
}

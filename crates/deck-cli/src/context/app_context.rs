use anyhow::Context;
use chrono::{Local, TimeDelta};
use deck_auth::{AuthClient, Session};
use deck_config::DeckConfig;
use deck_core::schedule::Schedule;
use deck_store::{DeckStore, RestBackend, SnapshotCache};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DeckConfig,
    pub session: Session,
    pub store: DeckStore<RestBackend>,
}

impl AppContext {
    /// Resolve the signed-in session (refreshing it if needed) and open the
    /// store for its owner.
    pub async fn init(config: DeckConfig) -> anyhow::Result<Self> {
        let client = auth_client(&config)?;
        let session = deck_auth::resolve_and_refresh(&client)
            .await
            .context("failed to restore the saved session")?
            .ok_or_else(|| anyhow::anyhow!("Not signed in. Run 'deck auth login' first."))?;

        let backend = &config.backend;
        let rest = RestBackend::new(
            backend.rest_url(),
            &backend.anon_key,
            &session.access_token,
            backend.timeout_secs,
        );

        let cache = if config.cache.enabled {
            let dir = config.cache.resolve_dir();
            if dir.is_none() {
                tracing::warn!("no cache directory available; offline fallback disabled");
            }
            dir.map(SnapshotCache::new)
        } else {
            None
        };

        let store = DeckStore::new(rest, cache, session.owner_id());
        tracing::debug!(owner_id = %session.owner_id(), "store ready");

        Ok(Self {
            config,
            session,
            store,
        })
    }

    /// Classifier anchored at the current local time with the configured windows.
    #[must_use]
    pub fn schedule(&self) -> Schedule<Local> {
        Schedule::new(Local::now())
            .with_due_soon_window(
                TimeDelta::try_minutes(self.config.general.due_soon_minutes).unwrap_or(TimeDelta::MAX),
            )
            .with_upcoming_days(self.config.general.upcoming_days)
    }
}

/// Identity client for the configured backend.
pub fn auth_client(config: &DeckConfig) -> anyhow::Result<AuthClient> {
    let backend = config.backend.require()?;
    Ok(AuthClient::new(
        backend.auth_url(),
        &backend.anon_key,
        backend.timeout_secs,
    ))
}

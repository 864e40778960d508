//! The data source adapter.
//!
//! `DeckStore` wraps a [`Backend`], an optional [`SnapshotCache`], and the
//! in-memory snapshot of each collection for one owner. Entity operations are
//! implemented as `impl DeckStore` blocks in [`crate::repos`].
//!
//! Every load follows the same protocol:
//! 1. Issue a request ticket
//! 2. Fetch from the backend
//! 3. On success, overwrite the disk snapshot
//! 4. On failure, read the disk snapshot (or fall back to empty)
//! 5. Replace the in-memory snapshot only if the ticket is still current

use std::future::Future;
use std::sync::Arc;

use deck_core::entities::{Category, Project, Task};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::Backend;
use crate::cache::{Collection, SnapshotCache};
use crate::guard::{RequestSequence, Ticket};

/// Where a collection snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Remote,
    Cache,
    /// Nothing loaded yet, or the fetch failed with no cached snapshot.
    #[default]
    Empty,
}

impl Origin {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Cache => "cache",
            Self::Empty => "empty",
        }
    }
}

/// Result of a collection load.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    /// The snapshot consumers should render. For a discarded stale response
    /// this is the snapshot installed by the newer request.
    pub records: Arc<Vec<T>>,
    pub origin: Origin,
    /// `false` when the response was discarded because a newer load started.
    pub applied: bool,
    /// Backend error that forced the cache fallback.
    pub error: Option<String>,
}

#[derive(Debug)]
struct SnapshotState<T> {
    records: Arc<Vec<T>>,
    origin: Origin,
    loaded: bool,
}

/// One collection's in-memory snapshot plus its request sequence.
///
/// Readers clone the `Arc`, so a replacement is atomic from their side.
/// Ticket checks happen under the lock they guard, so a stale response can
/// never land after a newer one.
#[derive(Debug)]
pub(crate) struct Snapshot<T> {
    sequence: RequestSequence,
    state: RwLock<SnapshotState<T>>,
    /// Serializes disk cache writes for this collection.
    persist: Mutex<()>,
}

impl<T: Clone> Snapshot<T> {
    fn new() -> Self {
        Self {
            sequence: RequestSequence::new(),
            state: RwLock::new(SnapshotState {
                records: Arc::new(Vec::new()),
                origin: Origin::Empty,
                loaded: false,
            }),
            persist: Mutex::new(()),
        }
    }

    pub(crate) fn records(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.state.read().records)
    }

    pub(crate) fn origin(&self) -> Origin {
        self.state.read().origin
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.state.read().loaded
    }

    /// Install `records` if `ticket` is still the latest request.
    fn replace_if_current(&self, ticket: Ticket, records: Arc<Vec<T>>, origin: Origin) -> bool {
        let mut state = self.state.write();
        if !self.sequence.is_current(ticket) {
            return false;
        }
        state.records = records;
        state.origin = origin;
        state.loaded = true;
        true
    }

    /// Mutate the snapshot in place (optimistic local writes).
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut state = self.state.write();
        f(Arc::make_mut(&mut state.records))
    }

    fn current(&self, applied: bool, error: Option<String>) -> Loaded<T> {
        let state = self.state.read();
        Loaded {
            records: Arc::clone(&state.records),
            origin: state.origin,
            applied,
            error,
        }
    }
}

/// Owner-scoped task, category, and project access with offline fallback.
pub struct DeckStore<B> {
    backend: B,
    cache: Option<SnapshotCache>,
    owner_id: String,
    pub(crate) tasks: Snapshot<Task>,
    pub(crate) categories: Snapshot<Category>,
    pub(crate) projects: Snapshot<Project>,
}

impl<B: Backend> DeckStore<B> {
    /// Create a store for `owner_id`. Pass `None` to disable the disk cache.
    pub fn new(backend: B, cache: Option<SnapshotCache>, owner_id: impl Into<String>) -> Self {
        Self {
            backend,
            cache,
            owner_id: owner_id.into(),
            tasks: Snapshot::new(),
            categories: Snapshot::new(),
            projects: Snapshot::new(),
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    #[must_use]
    pub const fn cache(&self) -> Option<&SnapshotCache> {
        self.cache.as_ref()
    }

    /// The current task snapshot without fetching.
    #[must_use]
    pub fn task_snapshot(&self) -> Arc<Vec<Task>> {
        self.tasks.records()
    }

    #[must_use]
    pub fn task_origin(&self) -> Origin {
        self.tasks.origin()
    }

    /// Fetch every task for the owner, newest first.
    pub async fn load_tasks(&self) -> Loaded<Task> {
        self.load(
            Collection::Tasks,
            &self.tasks,
            self.backend.fetch_tasks(&self.owner_id),
        )
        .await
    }

    /// Fetch every category for the owner, including inactive ones.
    pub async fn load_categories(&self) -> Loaded<Category> {
        self.load(
            Collection::Categories,
            &self.categories,
            self.backend.fetch_categories(&self.owner_id),
        )
        .await
    }

    pub async fn load_projects(&self) -> Loaded<Project> {
        self.load(
            Collection::Projects,
            &self.projects,
            self.backend.fetch_projects(&self.owner_id),
        )
        .await
    }

    async fn load<T, F>(&self, collection: Collection, snapshot: &Snapshot<T>, fetch: F) -> Loaded<T>
    where
        T: Clone + Serialize + DeserializeOwned,
        F: Future<Output = Result<Vec<T>, crate::error::StoreError>>,
    {
        let ticket = snapshot.sequence.issue();
        let (records, origin, error) = match fetch.await {
            Ok(records) => (records, Origin::Remote, None),
            Err(e) => {
                tracing::warn!(
                    collection = collection.as_str(),
                    error = %e,
                    "fetch failed, falling back to local snapshot"
                );
                let message = Some(e.to_string());
                if !snapshot.sequence.is_current(ticket) {
                    return snapshot.current(false, message);
                }
                match self.read_cache(collection) {
                    Some(cached) => (cached, Origin::Cache, message),
                    None => (Vec::new(), Origin::Empty, message),
                }
            }
        };

        let records = Arc::new(records);
        if !self.commit(collection, snapshot, ticket, Arc::clone(&records), origin) {
            tracing::warn!(
                collection = collection.as_str(),
                ticket = ticket.get(),
                "discarding stale fetch response"
            );
            return snapshot.current(false, error);
        }
        tracing::debug!(
            collection = collection.as_str(),
            count = records.len(),
            origin = origin.as_str(),
            "snapshot replaced"
        );
        Loaded {
            records,
            origin,
            applied: true,
            error,
        }
    }

    /// Install a load result and, for remote data, persist it to disk.
    ///
    /// Returns `false` without touching memory or disk when `ticket` has been
    /// superseded. The cache write re-checks the ticket under the collection's
    /// persist lock, so the newest snapshot is always the last one written.
    fn commit<T: Clone + Serialize>(
        &self,
        collection: Collection,
        snapshot: &Snapshot<T>,
        ticket: Ticket,
        records: Arc<Vec<T>>,
        origin: Origin,
    ) -> bool {
        if !snapshot.replace_if_current(ticket, Arc::clone(&records), origin) {
            return false;
        }
        if origin == Origin::Remote {
            let _persist = snapshot.persist.lock();
            if snapshot.sequence.is_current(ticket) {
                self.write_cache(collection, &records);
            }
        }
        true
    }

    fn write_cache<T: Serialize>(&self, collection: Collection, records: &[T]) {
        let Some(cache) = &self.cache else { return };
        if let Err(e) = cache.write(collection, &self.owner_id, records) {
            tracing::warn!(collection = collection.as_str(), error = %e, "failed to write snapshot cache");
        }
    }

    fn read_cache<T: DeserializeOwned>(&self, collection: Collection) -> Option<Vec<T>> {
        let cache = self.cache.as_ref()?;
        match cache.read(collection, &self.owner_id) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(collection = collection.as_str(), error = %e, "ignoring unreadable snapshot cache");
                None
            }
        }
    }

    /// The task snapshot, loading it first if nothing has been loaded yet.
    pub(crate) async fn ensure_tasks(&self) -> Arc<Vec<Task>> {
        if self.tasks.is_loaded() {
            self.tasks.records()
        } else {
            self.load_tasks().await.records
        }
    }

    pub(crate) async fn ensure_categories(&self) -> Arc<Vec<Category>> {
        if self.categories.is_loaded() {
            self.categories.records()
        } else {
            self.load_categories().await.records
        }
    }

    pub(crate) async fn ensure_projects(&self) -> Arc<Vec<Project>> {
        if self.projects.is_loaded() {
            self.projects.records()
        } else {
            self.load_projects().await.records
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use deck_core::entities::Task;
    use deck_core::enums::TaskStatus;
    use pretty_assertions::assert_eq;

    use super::Origin;
    use crate::cache::Collection;
    use crate::test_support::helpers::{OWNER, task, test_store_with_cache};

    fn ids(records: &[Task]) -> Vec<&str> {
        records.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn superseded_commit_leaves_memory_and_disk_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store_with_cache(dir.path());

        // The older request passed its fetch before the newer one was issued,
        // but commits after the newer one landed.
        let older = store.tasks.sequence.issue();
        let newer = store.tasks.sequence.issue();
        let fresh = Arc::new(vec![task("fresh", OWNER, TaskStatus::ToDo)]);
        let stale = Arc::new(vec![task("stale", OWNER, TaskStatus::ToDo)]);

        assert!(store.commit(Collection::Tasks, &store.tasks, newer, fresh, Origin::Remote));
        assert!(!store.commit(Collection::Tasks, &store.tasks, older, stale, Origin::Remote));

        assert_eq!(ids(&store.task_snapshot()), vec!["fresh"]);
        let cached: Vec<Task> = store
            .cache()
            .unwrap()
            .read(Collection::Tasks, OWNER)
            .unwrap()
            .unwrap();
        assert_eq!(ids(&cached), vec!["fresh"]);
    }

    #[test]
    fn superseded_ticket_does_not_write_cache() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store_with_cache(dir.path());

        let older = store.tasks.sequence.issue();
        store.tasks.sequence.issue();
        let stale = Arc::new(vec![task("stale", OWNER, TaskStatus::ToDo)]);

        assert!(!store.commit(Collection::Tasks, &store.tasks, older, stale, Origin::Remote));
        assert!(!store.tasks.is_loaded());
        let cached: Option<Vec<Task>> = store.cache().unwrap().read(Collection::Tasks, OWNER).unwrap();
        assert!(cached.is_none());
    }

    #[test]
    fn cache_fallback_is_not_written_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store_with_cache(dir.path());

        let ticket = store.tasks.sequence.issue();
        let cached = Arc::new(vec![task("cached", OWNER, TaskStatus::Done)]);
        assert!(store.commit(Collection::Tasks, &store.tasks, ticket, cached, Origin::Cache));

        assert_eq!(store.task_origin(), Origin::Cache);
        let on_disk: Option<Vec<Task>> = store.cache().unwrap().read(Collection::Tasks, OWNER).unwrap();
        assert!(on_disk.is_none());
    }
}

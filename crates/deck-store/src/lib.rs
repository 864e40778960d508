//! # deck-store
//!
//! The data source adapter for taskdeck.
//!
//! Fetches the signed-in owner's tasks, categories, and projects from the
//! hosted backend and keeps an in-memory snapshot of each collection:
//! - [`Backend`] is the owner-scoped CRUD seam ([`RestBackend`] over HTTP,
//!   [`MemoryBackend`] in-process)
//! - [`SnapshotCache`] is the on-disk read fallback used when a fetch fails
//! - [`RequestSequence`] drops fetch responses that a newer request superseded
//! - [`DeckStore`] validates input, enforces the completion rule on status
//!   changes, and keeps failed creates as pending local records

pub mod backend;
pub mod cache;
pub mod error;
pub mod guard;
pub mod memory;
pub mod repos;
pub mod service;
pub mod updates;

mod http;
mod test_support;

pub use backend::Backend;
pub use backend::rest::RestBackend;
pub use cache::{Collection, SnapshotCache};
pub use error::StoreError;
pub use guard::{RequestSequence, Ticket};
pub use memory::MemoryBackend;
pub use repos::{LOCAL_ID_PREFIX, SAVED_LOCALLY};
pub use service::{DeckStore, Loaded, Origin};

//! Entity operations on [`crate::DeckStore`].
//!
//! Each module adds methods to `DeckStore` via `impl DeckStore` blocks.

pub mod category;
pub mod project;
pub mod task;

/// Id prefix for records that have not reached the backend.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Notice attached to a create that was kept locally after a backend failure.
pub const SAVED_LOCALLY: &str = "Saved locally. The server could not be reached, so this record exists only on this device until it is re-created.";

pub(crate) fn local_id() -> String {
    format!("{LOCAL_ID_PREFIX}{}", uuid::Uuid::new_v4())
}

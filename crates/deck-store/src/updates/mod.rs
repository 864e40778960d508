//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are serialized into the PATCH body; `Some(None)` clears a nullable
//! column.

pub mod category;
pub mod project;
pub mod task;

pub use category::{CategoryUpdate, CategoryUpdateBuilder};
pub use project::{ProjectUpdate, ProjectUpdateBuilder};
pub use task::{TaskUpdate, TaskUpdateBuilder};

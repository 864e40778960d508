//! Entity structs for taskdeck domain objects.
//!
//! Each entity maps to a table on the hosted backend (`tasks`, `task_types`,
//! `projects`). Field names on the wire follow the backend columns
//! (`user_id`, `type_id`); the Rust names describe the role instead.

mod category;
mod project;
mod task;

pub use category::{Category, DEFAULT_CATEGORY_COLOR, DEFAULT_PALETTE, NewCategory};
pub use project::{NewProject, Project};
pub use task::{NewTask, SyncState, Task};

pub mod auth;
pub mod category;
pub mod project;
pub mod task;

pub use auth::AuthCommands;
pub use category::CategoryCommands;
pub use project::ProjectCommands;
pub use task::TaskCommands;

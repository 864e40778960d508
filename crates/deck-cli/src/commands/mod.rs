pub mod auth;
pub mod calendar;
pub mod category;
pub mod dashboard;
pub mod dispatch;
pub mod project;
pub mod schema;
pub mod shared;
pub mod task;

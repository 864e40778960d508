//! The data source seam.
//!
//! [`Backend`] is the owner-scoped record store the adapter talks to. The
//! hosted REST implementation lives in [`rest`]; [`crate::memory`] provides an
//! in-process implementation with failure injection.

pub mod rest;

use std::future::Future;

use chrono::{DateTime, Utc};
use deck_core::entities::{Category, NewCategory, NewProject, NewTask, Project, Task};
use serde::Serialize;

use crate::error::StoreError;
use crate::updates::{CategoryUpdate, ProjectUpdate, TaskUpdate};

/// Insert payload for a task: the validated form plus ownership and the
/// completion instant derived from its initial status.
#[derive(Debug, Clone, Serialize)]
pub struct TaskInsert<'a> {
    #[serde(rename = "user_id")]
    pub owner_id: &'a str,
    #[serde(flatten)]
    pub task: &'a NewTask,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryInsert<'a> {
    #[serde(rename = "user_id")]
    pub owner_id: &'a str,
    #[serde(flatten)]
    pub category: &'a NewCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectInsert<'a> {
    #[serde(rename = "user_id")]
    pub owner_id: &'a str,
    #[serde(flatten)]
    pub project: &'a NewProject,
}

/// Owner-scoped CRUD over tasks, categories, and projects.
///
/// Every call is filtered to `owner_id`; implementations must never return or
/// touch another owner's rows. Fetches return rows newest-first.
pub trait Backend: Send + Sync {
    fn fetch_tasks(
        &self,
        owner_id: &str,
    ) -> impl Future<Output = Result<Vec<Task>, StoreError>> + Send;

    fn insert_task(
        &self,
        row: &TaskInsert<'_>,
    ) -> impl Future<Output = Result<Task, StoreError>> + Send;

    fn update_task(
        &self,
        owner_id: &str,
        id: &str,
        update: &TaskUpdate,
    ) -> impl Future<Output = Result<Task, StoreError>> + Send;

    fn delete_task(
        &self,
        owner_id: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn fetch_categories(
        &self,
        owner_id: &str,
    ) -> impl Future<Output = Result<Vec<Category>, StoreError>> + Send;

    fn insert_category(
        &self,
        row: &CategoryInsert<'_>,
    ) -> impl Future<Output = Result<Category, StoreError>> + Send;

    fn update_category(
        &self,
        owner_id: &str,
        id: &str,
        update: &CategoryUpdate,
    ) -> impl Future<Output = Result<Category, StoreError>> + Send;

    fn fetch_projects(
        &self,
        owner_id: &str,
    ) -> impl Future<Output = Result<Vec<Project>, StoreError>> + Send;

    fn insert_project(
        &self,
        row: &ProjectInsert<'_>,
    ) -> impl Future<Output = Result<Project, StoreError>> + Send;

    fn update_project(
        &self,
        owner_id: &str,
        id: &str,
        update: &ProjectUpdate,
    ) -> impl Future<Output = Result<Project, StoreError>> + Send;

    fn delete_project(
        &self,
        owner_id: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

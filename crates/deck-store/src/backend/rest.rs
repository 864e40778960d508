//! Hosted REST backend (`{url}/rest/v1/<table>`).
//!
//! Rows are filtered with `user_id=eq.<owner>` on every request, and writes
//! ask for the affected rows back with `Prefer: return=representation`.

use std::time::Duration;

use deck_core::entities::{Category, Project, Task};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Backend, CategoryInsert, ProjectInsert, TaskInsert};
use crate::error::StoreError;
use crate::http::{check_response, read_json};
use crate::updates::{CategoryUpdate, ProjectUpdate, TaskUpdate};

const TASKS: &str = "tasks";
const CATEGORIES: &str = "task_types";
const PROJECTS: &str = "projects";

pub struct RestBackend {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
    access_token: String,
}

impl RestBackend {
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(
        rest_url: impl Into<String>,
        anon_key: impl Into<String>,
        access_token: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("taskdeck/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            rest_url: rest_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            access_token: access_token.into(),
        }
    }

    fn owner_query(owner_id: &str) -> String {
        format!("user_id=eq.{}", urlencoding::encode(owner_id))
    }

    fn row_query(owner_id: &str, id: &str) -> String {
        format!(
            "id=eq.{}&{}",
            urlencoding::encode(id),
            Self::owner_query(owner_id)
        )
    }

    fn url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/{table}", self.rest_url)
        } else {
            format!("{}/{table}?{query}", self.rest_url)
        }
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.access_token)
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        owner_id: &str,
    ) -> Result<Vec<T>, StoreError> {
        let query = format!("select=*&{}&order=created_at.desc", Self::owner_query(owner_id));
        let resp = self.request(Method::GET, self.url(table, &query)).send().await?;
        let rows: Vec<T> = read_json(check_response(resp).await?).await?;
        tracing::debug!(table, count = rows.len(), "fetched rows");
        Ok(rows)
    }

    async fn insert_row<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        table: &str,
        entity: &'static str,
        body: &B,
    ) -> Result<T, StoreError> {
        let resp = self
            .request(Method::POST, self.url(table, ""))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let rows: Vec<T> = read_json(check_response(resp).await?).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Parse(format!("insert into {entity} returned no row")))
    }

    async fn update_row<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        table: &str,
        entity: &'static str,
        owner_id: &str,
        id: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let resp = self
            .request(Method::PATCH, self.url(table, &Self::row_query(owner_id, id)))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let rows: Vec<T> = read_json(check_response(resp).await?).await?;
        rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            entity,
            id: id.to_string(),
        })
    }

    async fn delete_row(
        &self,
        table: &str,
        entity: &'static str,
        owner_id: &str,
        id: &str,
    ) -> Result<(), StoreError> {
        let resp = self
            .request(Method::DELETE, self.url(table, &Self::row_query(owner_id, id)))
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let rows: Vec<serde_json::Value> = read_json(check_response(resp).await?).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound {
                entity,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

impl Backend for RestBackend {
    async fn fetch_tasks(&self, owner_id: &str) -> Result<Vec<Task>, StoreError> {
        self.fetch_rows(TASKS, owner_id).await
    }

    async fn insert_task(&self, row: &TaskInsert<'_>) -> Result<Task, StoreError> {
        self.insert_row(TASKS, "task", row).await
    }

    async fn update_task(
        &self,
        owner_id: &str,
        id: &str,
        update: &TaskUpdate,
    ) -> Result<Task, StoreError> {
        self.update_row(TASKS, "task", owner_id, id, update).await
    }

    async fn delete_task(&self, owner_id: &str, id: &str) -> Result<(), StoreError> {
        self.delete_row(TASKS, "task", owner_id, id).await
    }

    async fn fetch_categories(&self, owner_id: &str) -> Result<Vec<Category>, StoreError> {
        self.fetch_rows(CATEGORIES, owner_id).await
    }

    async fn insert_category(&self, row: &CategoryInsert<'_>) -> Result<Category, StoreError> {
        self.insert_row(CATEGORIES, "task type", row).await
    }

    async fn update_category(
        &self,
        owner_id: &str,
        id: &str,
        update: &CategoryUpdate,
    ) -> Result<Category, StoreError> {
        self.update_row(CATEGORIES, "task type", owner_id, id, update)
            .await
    }

    async fn fetch_projects(&self, owner_id: &str) -> Result<Vec<Project>, StoreError> {
        self.fetch_rows(PROJECTS, owner_id).await
    }

    async fn insert_project(&self, row: &ProjectInsert<'_>) -> Result<Project, StoreError> {
        self.insert_row(PROJECTS, "project", row).await
    }

    async fn update_project(
        &self,
        owner_id: &str,
        id: &str,
        update: &ProjectUpdate,
    ) -> Result<Project, StoreError> {
        self.update_row(PROJECTS, "project", owner_id, id, update)
            .await
    }

    async fn delete_project(&self, owner_id: &str, id: &str) -> Result<(), StoreError> {
        self.delete_row(PROJECTS, "project", owner_id, id).await
    }
}

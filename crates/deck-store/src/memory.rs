//! In-process [`Backend`] with failure injection.
//!
//! Rows live behind a `parking_lot::Mutex`; the lock is never held across an
//! await. Reads capture the rows when the call starts, so a delayed fetch
//! returns the state as of its request.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Utc;
use deck_core::entities::{Category, Project, SyncState, Task};
use deck_core::enums::CategoryStatus;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::backend::{Backend, CategoryInsert, ProjectInsert, TaskInsert};
use crate::error::StoreError;
use crate::updates::{CategoryUpdate, ProjectUpdate, TaskUpdate};

#[derive(Debug, Default)]
struct Rows {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    projects: Vec<Project>,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows: Mutex<Rows>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fetch_delays: Mutex<VecDeque<Duration>>,
    calls: AtomicUsize,
}

fn unavailable() -> StoreError {
    StoreError::Api {
        status: 503,
        message: "backend unavailable".into(),
    }
}

fn not_found(entity: &'static str, id: &str) -> StoreError {
    StoreError::NotFound {
        entity,
        id: id.to_string(),
    }
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every fetch fail with a 503.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every insert, update, and delete fail with a 503.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Delay the next fetch (of any collection) by `delay`.
    pub fn delay_next_fetch(&self, delay: Duration) {
        self.fetch_delays.lock().push_back(delay);
    }

    /// Number of backend calls attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seed_task(&self, task: Task) {
        self.rows.lock().tasks.insert(0, task);
    }

    pub fn seed_category(&self, category: Category) {
        self.rows.lock().categories.insert(0, category);
    }

    pub fn seed_project(&self, project: Project) {
        self.rows.lock().projects.insert(0, project);
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.rows.lock().tasks.clone()
    }

    fn begin_read(&self) -> Result<Option<Duration>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.fetch_delays.lock().pop_front();
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(delay)
    }

    fn begin_write(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }

    async fn read<T: Clone>(
        &self,
        select: impl FnOnce(&Rows) -> Vec<T>,
        owner_id: &str,
        owner_of: impl Fn(&T) -> &str,
    ) -> Result<Vec<T>, StoreError> {
        let delay = self.begin_read()?;
        let rows: Vec<T> = select(&self.rows.lock())
            .into_iter()
            .filter(|row| owner_of(row) == owner_id)
            .collect();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(rows)
    }
}

impl Backend for MemoryBackend {
    async fn fetch_tasks(&self, owner_id: &str) -> Result<Vec<Task>, StoreError> {
        self.read(|rows| rows.tasks.clone(), owner_id, |t| t.owner_id.as_str())
            .await
    }

    async fn insert_task(&self, row: &TaskInsert<'_>) -> Result<Task, StoreError> {
        self.begin_write()?;
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            owner_id: row.owner_id.to_string(),
            title: row.task.title.clone(),
            description: row.task.description.clone(),
            status: row.task.status,
            priority: row.task.priority,
            due_at: row.task.due_at,
            category_id: row.task.category_id.clone(),
            project_id: row.task.project_id.clone(),
            created_at: now,
            updated_at: now,
            completed_at: row.completed_at,
            sync: SyncState::Confirmed,
        };
        self.rows.lock().tasks.insert(0, task.clone());
        Ok(task)
    }

    async fn update_task(
        &self,
        owner_id: &str,
        id: &str,
        update: &TaskUpdate,
    ) -> Result<Task, StoreError> {
        self.begin_write()?;
        let mut rows = self.rows.lock();
        let task = rows
            .tasks
            .iter_mut()
            .find(|t| t.id == id && t.owner_id == owner_id)
            .ok_or_else(|| not_found("task", id))?;
        update.apply_to(task);
        Ok(task.clone())
    }

    async fn delete_task(&self, owner_id: &str, id: &str) -> Result<(), StoreError> {
        self.begin_write()?;
        let mut rows = self.rows.lock();
        let before = rows.tasks.len();
        rows.tasks.retain(|t| !(t.id == id && t.owner_id == owner_id));
        if rows.tasks.len() == before {
            return Err(not_found("task", id));
        }
        Ok(())
    }

    async fn fetch_categories(&self, owner_id: &str) -> Result<Vec<Category>, StoreError> {
        self.read(
            |rows| rows.categories.clone(),
            owner_id,
            |c| c.owner_id.as_str(),
        )
        .await
    }

    async fn insert_category(&self, row: &CategoryInsert<'_>) -> Result<Category, StoreError> {
        self.begin_write()?;
        let category = Category {
            id: Uuid::new_v4().to_string(),
            owner_id: row.owner_id.to_string(),
            name: row.category.name.clone(),
            description: row.category.description.clone(),
            color: row.category.color.clone(),
            status: CategoryStatus::Active,
            created_at: Utc::now(),
            sync: SyncState::Confirmed,
        };
        self.rows.lock().categories.insert(0, category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        owner_id: &str,
        id: &str,
        update: &CategoryUpdate,
    ) -> Result<Category, StoreError> {
        self.begin_write()?;
        let mut rows = self.rows.lock();
        let category = rows
            .categories
            .iter_mut()
            .find(|c| c.id == id && c.owner_id == owner_id)
            .ok_or_else(|| not_found("task type", id))?;
        update.apply_to(category);
        Ok(category.clone())
    }

    async fn fetch_projects(&self, owner_id: &str) -> Result<Vec<Project>, StoreError> {
        self.read(
            |rows| rows.projects.clone(),
            owner_id,
            |p| p.owner_id.as_str(),
        )
        .await
    }

    async fn insert_project(&self, row: &ProjectInsert<'_>) -> Result<Project, StoreError> {
        self.begin_write()?;
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            owner_id: row.owner_id.to_string(),
            name: row.project.name.clone(),
            description: row.project.description.clone(),
            category_id: row.project.category_id.clone(),
            status: row.project.status,
            start_date: row.project.start_date,
            target_end_date: row.project.target_end_date,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().projects.insert(0, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        owner_id: &str,
        id: &str,
        update: &ProjectUpdate,
    ) -> Result<Project, StoreError> {
        self.begin_write()?;
        let mut rows = self.rows.lock();
        let project = rows
            .projects
            .iter_mut()
            .find(|p| p.id == id && p.owner_id == owner_id)
            .ok_or_else(|| not_found("project", id))?;
        update.apply_to(project);
        Ok(project.clone())
    }

    async fn delete_project(&self, owner_id: &str, id: &str) -> Result<(), StoreError> {
        self.begin_write()?;
        let mut rows = self.rows.lock();
        let before = rows.projects.len();
        rows.projects
            .retain(|p| !(p.id == id && p.owner_id == owner_id));
        if rows.projects.len() == before {
            return Err(not_found("project", id));
        }
        Ok(())
    }
}

//! Task operations: load, create with local fallback, edit, status changes.

use chrono::Utc;
use deck_core::entities::{NewTask, SyncState, Task};
use deck_core::enums::TaskStatus;
use deck_core::responses::Created;
use deck_core::transition::{apply_status, completion_for, duplicate, toggle_complete};

use crate::backend::{Backend, TaskInsert};
use crate::error::StoreError;
use crate::repos::{SAVED_LOCALLY, local_id};
use crate::service::DeckStore;
use crate::updates::task::{TaskUpdate, TaskUpdateBuilder};

impl<B: Backend> DeckStore<B> {
    /// Validate and insert a task.
    ///
    /// A backend failure does not lose the input: the task is kept in the
    /// local snapshot as [`SyncState::PendingSync`] with a `local-` id and the
    /// result carries a notice instead of an error.
    ///
    /// # Errors
    ///
    /// Only [`StoreError::Validation`]; validation runs before any backend call.
    pub async fn create_task(&self, form: NewTask) -> Result<Created<Task>, StoreError> {
        let form = form.validated()?;
        let now = Utc::now();
        let completed_at = completion_for(TaskStatus::ToDo, None, form.status, now);
        let row = TaskInsert {
            owner_id: self.owner_id(),
            task: &form,
            completed_at,
        };

        let (task, notice) = match self.backend().insert_task(&row).await {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "task created");
                (task, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "task insert failed, keeping local copy");
                let task = Task {
                    id: local_id(),
                    owner_id: self.owner_id().to_string(),
                    title: form.title,
                    description: form.description,
                    status: form.status,
                    priority: form.priority,
                    due_at: form.due_at,
                    category_id: form.category_id,
                    project_id: form.project_id,
                    created_at: now,
                    updated_at: now,
                    completed_at,
                    sync: SyncState::PendingSync,
                };
                (task, Some(SAVED_LOCALLY.to_string()))
            }
        };

        self.tasks.update(|tasks| tasks.insert(0, task.clone()));
        Ok(Created {
            record: task,
            notice,
        })
    }

    /// Look a task up in the snapshot, loading tasks first if needed.
    pub async fn get_task(&self, id: &str) -> Result<Task, StoreError> {
        self.ensure_tasks()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "task",
                id: id.to_string(),
            })
    }

    /// Apply a partial edit.
    ///
    /// A status change goes through [`apply_status`] and `updated_at` is
    /// always refreshed. The edit is applied to the local snapshot before the
    /// backend call and is not rolled back on failure.
    pub async fn update_task(&self, id: &str, mut update: TaskUpdate) -> Result<Task, StoreError> {
        update.validate()?;
        let mut next = self.get_task(id).await?;
        let now = Utc::now();
        let status = update.status.take();
        update.apply_to(&mut next);
        match status {
            Some(status) => apply_status(&mut next, status, now),
            None => next.updated_at = now,
        }
        update.status = status;
        update.completed_at = status.map(|_| next.completed_at);
        update.updated_at = Some(next.updated_at);

        self.tasks.update(|tasks| {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                *task = next.clone();
            }
        });

        match self.backend().update_task(self.owner_id(), id, &update).await {
            Ok(saved) => {
                self.tasks.update(|tasks| {
                    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                        *task = saved.clone();
                    }
                });
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(task_id = id, error = %e, "task update failed");
                Err(e)
            }
        }
    }

    pub async fn set_task_status(&self, id: &str, status: TaskStatus) -> Result<Task, StoreError> {
        self.update_task(id, TaskUpdateBuilder::new().status(status).build())
            .await
    }

    /// Flip between Done and To Do.
    pub async fn toggle_task(&self, id: &str) -> Result<Task, StoreError> {
        let current = self.get_task(id).await?;
        self.set_task_status(id, toggle_complete(current.status))
            .await
    }

    /// Create a copy of `id` with a " (copy)" title and status To Do.
    pub async fn duplicate_task(&self, id: &str) -> Result<Created<Task>, StoreError> {
        let source = self.get_task(id).await?;
        self.create_task(duplicate(&source)).await
    }

    /// Delete a task. The local snapshot drops it before the backend call.
    pub async fn delete_task(&self, id: &str) -> Result<(), StoreError> {
        self.tasks.update(|tasks| tasks.retain(|t| t.id != id));
        self.backend()
            .delete_task(self.owner_id(), id)
            .await
            .inspect_err(|e| tracing::warn!(task_id = id, error = %e, "task delete failed"))?;
        tracing::info!(task_id = id, "task deleted");
        Ok(())
    }
}

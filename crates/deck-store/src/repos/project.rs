//! Project operations. Progress is derived from linked tasks, never stored.

use chrono::Utc;
use deck_core::entities::{NewProject, Project};
use deck_core::enums::ProjectStatus;
use deck_core::progress::ProjectProgress;
use deck_core::responses::ProjectDetail;

use crate::backend::{Backend, ProjectInsert};
use crate::error::StoreError;
use crate::service::DeckStore;
use crate::updates::project::{ProjectUpdate, ProjectUpdateBuilder};

impl<B: Backend> DeckStore<B> {
    /// Active projects, for selection menus.
    pub async fn active_projects(&self) -> Vec<Project> {
        self.load_projects()
            .await
            .records
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .cloned()
            .collect()
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        self.ensure_projects()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "project",
                id: id.to_string(),
            })
    }

    /// A project with its linked tasks and derived progress.
    pub async fn project_detail(&self, id: &str) -> Result<ProjectDetail, StoreError> {
        let project = self.get_project(id).await?;
        let tasks: Vec<_> = self
            .ensure_tasks()
            .await
            .iter()
            .filter(|t| t.project_id.as_deref() == Some(id))
            .cloned()
            .collect();
        Ok(ProjectDetail {
            progress: ProjectProgress::of(&tasks),
            project,
            tasks,
        })
    }

    /// Validate and insert a project. Unlike tasks, a failed insert is
    /// returned as an error.
    pub async fn create_project(&self, form: NewProject) -> Result<Project, StoreError> {
        let form = form.validated()?;
        let row = ProjectInsert {
            owner_id: self.owner_id(),
            project: &form,
        };
        let project = self
            .backend()
            .insert_project(&row)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "project insert failed"))?;
        tracing::info!(project_id = %project.id, "project created");
        self.projects
            .update(|projects| projects.insert(0, project.clone()));
        Ok(project)
    }

    pub async fn update_project(
        &self,
        id: &str,
        mut update: ProjectUpdate,
    ) -> Result<Project, StoreError> {
        update.validate()?;
        update.updated_at = Some(Utc::now());
        self.projects.update(|projects| {
            if let Some(project) = projects.iter_mut().find(|p| p.id == id) {
                update.apply_to(project);
            }
        });

        let saved = self
            .backend()
            .update_project(self.owner_id(), id, &update)
            .await
            .inspect_err(|e| tracing::warn!(project_id = id, error = %e, "project update failed"))?;
        self.projects.update(|projects| {
            if let Some(project) = projects.iter_mut().find(|p| p.id == id) {
                *project = saved.clone();
            }
        });
        Ok(saved)
    }

    pub async fn set_project_status(
        &self,
        id: &str,
        status: ProjectStatus,
    ) -> Result<Project, StoreError> {
        self.update_project(id, ProjectUpdateBuilder::new().status(status).build())
            .await
    }

    /// Delete a project. Linked tasks keep their dangling reference.
    pub async fn delete_project(&self, id: &str) -> Result<(), StoreError> {
        self.projects.update(|projects| projects.retain(|p| p.id != id));
        self.backend()
            .delete_project(self.owner_id(), id)
            .await
            .inspect_err(|e| tracing::warn!(project_id = id, error = %e, "project delete failed"))?;
        tracing::info!(project_id = id, "project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use deck_core::enums::TaskStatus;
    use deck_core::errors::ValidationError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{OWNER, task, test_store};

    fn form(name: &str) -> NewProject {
        NewProject {
            name: name.into(),
            category_id: Some("work".into()),
            ..NewProject::default()
        }
    }

    #[tokio::test]
    async fn detail_derives_progress_from_linked_tasks() {
        let store = test_store();
        let project = store.create_project(form("Launch")).await.unwrap();

        for (id, status) in [("a", TaskStatus::Done), ("b", TaskStatus::ToDo), ("c", TaskStatus::Done)] {
            let mut t = task(id, OWNER, status);
            t.project_id = Some(project.id.clone());
            store.backend().seed_task(t);
        }
        store.backend().seed_task(task("loose", OWNER, TaskStatus::Done));

        let detail = store.project_detail(&project.id).await.unwrap();
        assert_eq!(detail.tasks.len(), 3);
        assert_eq!(detail.progress.completed, 2);
        assert_eq!(detail.progress.percent, 67);
    }

    #[tokio::test]
    async fn project_requires_name_and_category() {
        let store = test_store();
        let err = store.create_project(form("  ")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::MissingName)));

        let no_category = NewProject {
            name: "Garden".into(),
            ..NewProject::default()
        };
        let err = store.create_project(no_category).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::MissingCategory)));
        assert_eq!(store.backend().calls(), 0);
    }

    #[tokio::test]
    async fn status_change_and_active_filter() {
        let store = test_store();
        let kept = store.create_project(form("Kept")).await.unwrap();
        let paused = store.create_project(form("Paused")).await.unwrap();

        let updated = store
            .set_project_status(&paused.id, ProjectStatus::OnHold)
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::OnHold);

        let active: Vec<String> = store
            .active_projects()
            .await
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(active, vec![kept.id]);
    }

    #[tokio::test]
    async fn failed_create_is_an_error() {
        let store = test_store();
        store.backend().fail_writes(true);
        let err = store.create_project(form("Offline")).await.unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn delete_project() {
        let store = test_store();
        let project = store.create_project(form("Gone")).await.unwrap();
        store.delete_project(&project.id).await.unwrap();
        assert!(matches!(
            store.get_project(&project.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }
}

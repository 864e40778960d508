//! Category (task type) operations. Categories are never deleted; they are
//! toggled inactive instead.

use chrono::Utc;
use deck_core::entities::{Category, NewCategory, SyncState};
use deck_core::enums::CategoryStatus;
use deck_core::errors::ValidationError;
use deck_core::responses::Created;

use crate::backend::{Backend, CategoryInsert};
use crate::error::StoreError;
use crate::repos::{SAVED_LOCALLY, local_id};
use crate::service::DeckStore;
use crate::updates::category::{CategoryUpdate, CategoryUpdateBuilder};

impl<B: Backend> DeckStore<B> {
    /// Active categories, for selection menus.
    pub async fn active_categories(&self) -> Vec<Category> {
        self.load_categories()
            .await
            .records
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect()
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, StoreError> {
        self.ensure_categories()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "task type",
                id: id.to_string(),
            })
    }

    /// Validate and insert a category, keeping a pending local copy when the
    /// backend is unreachable.
    pub async fn create_category(
        &self,
        form: NewCategory,
    ) -> Result<Created<Category>, StoreError> {
        let form = form.validated()?;
        let row = CategoryInsert {
            owner_id: self.owner_id(),
            category: &form,
        };

        let (category, notice) = match self.backend().insert_category(&row).await {
            Ok(category) => {
                tracing::info!(category_id = %category.id, "task type created");
                (category, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "task type insert failed, keeping local copy");
                let category = Category {
                    id: local_id(),
                    owner_id: self.owner_id().to_string(),
                    name: form.name,
                    description: form.description,
                    color: form.color,
                    status: CategoryStatus::Active,
                    created_at: Utc::now(),
                    sync: SyncState::PendingSync,
                };
                (category, Some(SAVED_LOCALLY.to_string()))
            }
        };

        self.categories
            .update(|categories| categories.insert(0, category.clone()));
        Ok(Created {
            record: category,
            notice,
        })
    }

    pub async fn update_category(
        &self,
        id: &str,
        update: CategoryUpdate,
    ) -> Result<Category, StoreError> {
        update.validate()?;
        self.categories.update(|categories| {
            if let Some(category) = categories.iter_mut().find(|c| c.id == id) {
                update.apply_to(category);
            }
        });

        let saved = self
            .backend()
            .update_category(self.owner_id(), id, &update)
            .await
            .inspect_err(|e| tracing::warn!(category_id = id, error = %e, "task type update failed"))?;
        self.categories.update(|categories| {
            if let Some(category) = categories.iter_mut().find(|c| c.id == id) {
                *category = saved.clone();
            }
        });
        Ok(saved)
    }

    /// Flip between Active and Inactive.
    pub async fn toggle_category(&self, id: &str) -> Result<Category, StoreError> {
        let current = self.get_category(id).await?;
        let update = CategoryUpdateBuilder::new()
            .status(current.status.toggled())
            .build();
        self.update_category(id, update).await
    }

    /// Always rejected: deleting a category would orphan its tasks.
    pub fn delete_category(&self, id: &str) -> Result<(), StoreError> {
        tracing::debug!(category_id = id, "rejecting task type deletion");
        Err(ValidationError::CategoryDeletion.into())
    }
}

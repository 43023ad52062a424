//! Repository service - Handles repository collection use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewRepository, Repository, RepositoryChanges};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// List all repositories in insertion order
    async fn list(&self) -> AppResult<Vec<Repository>>;

    /// Create a repository. Title, url and techs must all be non-empty.
    async fn create(&self, input: NewRepository) -> AppResult<Repository>;

    /// Overwrite title, url and techs of an existing repository
    async fn update(&self, id: Uuid, changes: RepositoryChanges) -> AppResult<Repository>;

    /// Remove a repository
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Add one like to a repository
    async fn like(&self, id: Uuid) -> AppResult<Repository>;

    /// Number of stored repositories
    async fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of RepositoryService over the in-memory store.
pub struct RepositoryManager {
    store: Arc<MemoryStore>,
}

impl RepositoryManager {
    /// Create new repository service instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RepositoryService for RepositoryManager {
    async fn list(&self) -> AppResult<Vec<Repository>> {
        Ok(self.store.all().await)
    }

    async fn create(&self, input: NewRepository) -> AppResult<Repository> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(fields = ?missing, "Rejected repository with empty fields");
            return Err(AppError::validation(missing));
        }

        let repository = self.store.insert(Repository::new(input)).await?;
        tracing::info!(id = %repository.id, title = %repository.title, "Repository created");

        Ok(repository)
    }

    async fn update(&self, id: Uuid, changes: RepositoryChanges) -> AppResult<Repository> {
        let blank = changes.blank_fields();
        if !blank.is_empty() {
            // Updates are accepted unvalidated; surface it instead of rejecting.
            tracing::warn!(%id, fields = ?blank, "Repository update with absent or empty fields");
        }

        let repository = self
            .store
            .modify(id, |repository| repository.apply(changes))
            .await
            .ok_or_not_found()?;
        tracing::info!(%id, "Repository updated");

        Ok(repository)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.remove(id).await.ok_or_not_found()?;
        tracing::info!(%id, "Repository deleted");

        Ok(())
    }

    async fn like(&self, id: Uuid) -> AppResult<Repository> {
        let repository = self
            .store
            .modify(id, Repository::like)
            .await
            .ok_or_not_found()?;
        tracing::debug!(%id, likes = repository.likes, "Repository liked");

        Ok(repository)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.store.len().await)
    }
}

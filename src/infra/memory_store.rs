//! In-memory repository collection.
//!
//! The collection lives for the lifetime of the process. Every accessor
//! holds the lock for the whole read or read-modify-write, so each call is
//! atomic with respect to concurrent requests.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Repository;
use crate::errors::{AppError, AppResult};

/// Insertion-ordered collection of repositories guarded by a lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    repositories: RwLock<Vec<Repository>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the whole collection in insertion order
    pub async fn all(&self) -> Vec<Repository> {
        self.repositories.read().await.clone()
    }

    /// Number of stored repositories
    pub async fn len(&self) -> usize {
        self.repositories.read().await.len()
    }

    /// Whether the store holds no repositories
    pub async fn is_empty(&self) -> bool {
        self.repositories.read().await.is_empty()
    }

    /// Append a repository to the end of the collection.
    ///
    /// Fails if a repository with the same id is already stored.
    pub async fn insert(&self, repository: Repository) -> AppResult<Repository> {
        let mut repositories = self.repositories.write().await;

        if repositories.iter().any(|r| r.id == repository.id) {
            return Err(AppError::internal(format!(
                "Duplicate repository id {}",
                repository.id
            )));
        }

        repositories.push(repository.clone());
        Ok(repository)
    }

    /// Mutate the first repository with the given id in place.
    ///
    /// Returns the updated repository, or `None` if the id is unknown.
    pub async fn modify<F>(&self, id: Uuid, f: F) -> Option<Repository>
    where
        F: FnOnce(&mut Repository),
    {
        let mut repositories = self.repositories.write().await;
        let repository = repositories.iter_mut().find(|r| r.id == id)?;
        f(repository);
        Some(repository.clone())
    }

    /// Remove the first repository with the given id, keeping the order of
    /// the remaining ones.
    pub async fn remove(&self, id: Uuid) -> Option<Repository> {
        let mut repositories = self.repositories.write().await;
        let index = repositories.iter().position(|r| r.id == id)?;
        Some(repositories.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewRepository;

    fn repository(title: &str) -> Repository {
        Repository::new(NewRepository::new(
            title,
            format!("https://github.com/example/{title}"),
            vec!["Rust".into()],
        ))
    }

    async fn seeded(titles: &[&str]) -> (MemoryStore, Vec<Uuid>) {
        let store = MemoryStore::new();
        let mut ids = Vec::new();
        for title in titles {
            ids.push(store.insert(repository(title)).await.unwrap().id);
        }
        (store, ids)
    }

    #[tokio::test]
    async fn test_insert_keeps_order() {
        assert!(MemoryStore::new().is_empty().await);

        let (store, _) = seeded(&["a", "b", "c"]).await;
        assert!(!store.is_empty().await);

        let titles: Vec<_> = store.all().await.into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = MemoryStore::new();
        let first = store.insert(repository("a")).await.unwrap();

        let result = store.insert(first.clone()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_preserves_remaining_order() {
        let (store, ids) = seeded(&["a", "b", "c"]).await;

        let removed = store.remove(ids[1]).await.unwrap();

        assert_eq!(removed.title, "b");
        let titles: Vec<_> = store.all().await.into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let (store, _) = seeded(&["a"]).await;

        assert!(store.remove(Uuid::new_v4()).await.is_none());
        assert!(store.modify(Uuid::new_v4(), |r| r.like()).await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_modify_in_place() {
        let (store, ids) = seeded(&["a", "b"]).await;

        let updated = store.modify(ids[0], |r| r.like()).await.unwrap();

        assert_eq!(updated.likes, 1);
        assert_eq!(store.all().await[0].likes, 1);
        assert_eq!(store.all().await[1].likes, 0);
    }

    #[tokio::test]
    async fn test_concurrent_likes_are_not_lost() {
        let (store, ids) = seeded(&["a"]).await;
        let store = std::sync::Arc::new(store);
        let id = ids[0];

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.modify(id, |r| r.like()).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.all().await[0].likes, 50);
    }
}

//! # In-Memory Service Repository
//!
//! In-memory implementation of [`ServiceRepository`].
//!
//! Used by the server when the catalog is seeded from a file, and by tests.

use crate::domain::entities::ServiceDefinition;
use crate::domain::value_objects::ServiceId;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, ServiceRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ServiceRepository`].
///
/// Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryServiceRepository {
    storage: Arc<RwLock<HashMap<ServiceId, ServiceDefinition>>>,
}

impl InMemoryServiceRepository {
    /// Creates a new empty in-memory service repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a repository pre-populated with `services`.
    ///
    /// Later entries replace earlier ones with the same ID.
    #[must_use]
    pub fn with_services(services: impl IntoIterator<Item = ServiceDefinition>) -> Self {
        let storage = services
            .into_iter()
            .map(|s| (s.id().clone(), s))
            .collect::<HashMap<_, _>>();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// Returns the number of services in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all services from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryServiceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn save(&self, service: &ServiceDefinition) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(service.id().clone(), service.clone());
        Ok(())
    }

    async fn insert(&self, service: &ServiceDefinition) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        match storage.entry(service.id().clone()) {
            Entry::Occupied(_) => Err(RepositoryError::duplicate("Service", service.id().as_str())),
            Entry::Vacant(slot) => {
                slot.insert(service.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, id: &ServiceId) -> RepositoryResult<Option<ServiceDefinition>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<ServiceDefinition>> {
        let storage = self.storage.read().await;
        let mut all: Vec<ServiceDefinition> = storage.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }

    async fn delete(&self, id: &ServiceId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::ServiceTemplate;
    use crate::domain::value_objects::Price;
    use rust_decimal::Decimal;

    fn service(id: &str) -> ServiceDefinition {
        ServiceDefinition::new(
            id,
            format!("Service {id}"),
            Price::new(Decimal::new(100, 0)).unwrap(),
            ServiceTemplate::empty(),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryServiceRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryServiceRepository::new();
        let svc = service("koltuk");
        repo.save(&svc).await.unwrap();

        let retrieved = repo.get(svc.id()).await.unwrap();
        assert_eq!(retrieved, Some(svc));
    }

    #[tokio::test]
    async fn insert_rejects_taken_id() {
        let repo = InMemoryServiceRepository::new();
        repo.insert(&service("koltuk")).await.unwrap();

        let err = repo.insert(&service("koltuk")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate { ref id, .. } if id == "koltuk"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryServiceRepository::new();
        let result = repo.get(&ServiceId::new("missing")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn get_all_is_sorted_by_id() {
        let repo = InMemoryServiceRepository::with_services([service("b"), service("a")]);
        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id().as_str(), "a");
        assert_eq!(all[1].id().as_str(), "b");
    }

    #[tokio::test]
    async fn delete() {
        let repo = InMemoryServiceRepository::with_services([service("a")]);
        assert!(repo.delete(&ServiceId::new("a")).await.unwrap());
        assert!(!repo.delete(&ServiceId::new("a")).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryServiceRepository::new();
        let clone = repo.clone();
        repo.save(&service("a")).await.unwrap();
        assert_eq!(clone.count().await.unwrap(), 1);

        clone.clear().await;
        assert!(repo.is_empty());
    }
}

//! # Repository Traits
//!
//! Port definitions for the service catalog.
//!
//! The catalog is owned by an external catalog-management system; this
//! crate only needs to read service templates. The [`ServiceRepository`]
//! port keeps the pricing code independent of where templates come from.
//!
//! # Examples
//!
//! ```ignore
//! use hauze_quote::infrastructure::persistence::traits::ServiceRepository;
//!
//! async fn count_services(repo: &impl ServiceRepository) {
//!     let n = repo.count().await.unwrap();
//!     println!("{n} services in catalog");
//! }
//! ```

use crate::domain::entities::ServiceDefinition;
use crate::domain::value_objects::ServiceId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },
}

impl RepositoryError {
    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for priced services and their attribute templates.
#[async_trait]
pub trait ServiceRepository: Send + Sync + fmt::Debug {
    /// Saves a service, replacing any existing one with the same ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend fails.
    async fn save(&self, service: &ServiceDefinition) -> RepositoryResult<()>;

    /// Inserts a service whose ID is not taken yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a service with the same ID
    /// already exists.
    async fn insert(&self, service: &ServiceDefinition) -> RepositoryResult<()>;

    /// Gets a service by ID.
    ///
    /// Returns `None` if the service does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend fails.
    async fn get(&self, id: &ServiceId) -> RepositoryResult<Option<ServiceDefinition>>;

    /// Gets all services, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend fails.
    async fn get_all(&self) -> RepositoryResult<Vec<ServiceDefinition>>;

    /// Deletes a service by ID.
    ///
    /// Returns `true` if the service was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend fails.
    async fn delete(&self, id: &ServiceId) -> RepositoryResult<bool>;

    /// Counts the services.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backend fails.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_error() {
        let err = RepositoryError::duplicate("Service", "svc-456");
        assert!(matches!(err, RepositoryError::Duplicate { entity_type: "Service", ref id } if id == "svc-456"));
        assert!(err.to_string().contains("already exists"));
    }
}

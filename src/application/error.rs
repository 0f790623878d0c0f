//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - Validation, quantity and arithmetic failures
//! ├── Repository(RepositoryError)  - Catalog backend failures
//! └── NotFound { .. }              - Unknown service
//! ```
//!
//! # Examples
//!
//! ```
//! use hauze_quote::application::error::ApplicationError;
//!
//! let err = ApplicationError::not_found("Service", "koltuk-yikama");
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from pricing rules.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Catalog repository failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },
}

impl ApplicationError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the request itself was at fault.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_client_error())
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::Validation(_)) => "VALIDATION_ERROR",
            Self::Domain(DomainError::InvalidQuantity(_)) => "INVALID_QUANTITY",
            Self::Domain(DomainError::InvalidTemplate { .. }) => "INVALID_TEMPLATE",
            Self::Domain(DomainError::Arithmetic(_)) => "ARITHMETIC_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Repository(_) => "REPOSITORY_ERROR",
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

//! # Domain Errors
//!
//! Error types for pricing rules and catalog invariants.
//!
//! ```text
//! DomainError
//! ├── Validation(ValidationError)  - Configuration does not fit the template
//! ├── InvalidQuantity(String)      - Quantity rejected by the active policy
//! ├── InvalidTemplate { .. }       - Catalog template breaks an invariant
//! └── Arithmetic(ArithmeticError)  - Decimal overflow
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::enums::AttributeKind;
use thiserror::Error;

/// A configuration that does not satisfy its service template.
///
/// Every variant names the offending attribute so callers can highlight the
/// field that needs attention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required attribute has no (or an empty) value.
    #[error("missing required attribute: {attribute}")]
    MissingRequired {
        /// Attribute name.
        attribute: String,
    },

    /// A select value does not match any option label.
    #[error("invalid value {value:?} for attribute {attribute}")]
    InvalidOption {
        /// Attribute name.
        attribute: String,
        /// The value supplied by the caller.
        value: String,
    },

    /// The value has the wrong shape for the attribute kind.
    #[error("attribute {attribute} expects a {expected} value, got {value}")]
    TypeMismatch {
        /// Attribute name.
        attribute: String,
        /// Kind declared by the template.
        expected: AttributeKind,
        /// The value supplied by the caller, rendered as JSON.
        value: String,
    },
}

impl ValidationError {
    /// Creates a missing-required error.
    #[must_use]
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequired {
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid-option error.
    #[must_use]
    pub fn invalid_option(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates a type-mismatch error.
    #[must_use]
    pub fn type_mismatch(
        attribute: impl Into<String>,
        expected: AttributeKind,
        value: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            attribute: attribute.into(),
            expected,
            value: value.into(),
        }
    }

    /// Returns the name of the attribute that failed validation.
    #[must_use]
    pub fn attribute(&self) -> &str {
        match self {
            Self::MissingRequired { attribute }
            | Self::InvalidOption { attribute, .. }
            | Self::TypeMismatch { attribute, .. } => attribute,
        }
    }
}

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Configuration failed validation against the template.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Quantity rejected by the quantity policy.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Template breaks a structural invariant.
    #[error("invalid template attribute {attribute}: {reason}")]
    InvalidTemplate {
        /// Attribute name.
        attribute: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Checked arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid quantity error.
    #[must_use]
    pub fn invalid_quantity(message: impl Into<String>) -> Self {
        Self::InvalidQuantity(message.into())
    }

    /// Creates an invalid template error.
    #[must_use]
    pub fn invalid_template(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the caller can fix the error by changing the request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidQuantity(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! # Domain Layer
//!
//! Pricing rules with no I/O.
//!
//! - [`value_objects`]: Prices, quantities, impacts and identifiers
//! - [`entities`]: Service catalog entries and caller configurations
//! - [`services`]: The price quote engine
//! - [`errors`]: Validation and invariant errors

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult, ValidationError};

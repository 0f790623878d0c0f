//! # Application Layer
//!
//! Use cases coordinating the domain and the catalog.
//!
//! - [`error`]: Application error type
//! - [`services`]: Quote use cases

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};

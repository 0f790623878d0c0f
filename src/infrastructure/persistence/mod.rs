//! # Persistence Layer
//!
//! Repository ports and implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`ServiceRepository`]: Read access to priced services and templates
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory catalog, seeded from a file or by tests

pub mod in_memory;
pub mod traits;

pub use traits::{RepositoryError, RepositoryResult, ServiceRepository};

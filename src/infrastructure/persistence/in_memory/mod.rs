//! # In-Memory Repositories
//!
//! In-memory implementations without database dependencies.
//!
//! ## Available Repositories
//!
//! - [`InMemoryServiceRepository`]: Service catalog persistence
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod service_repository;

pub use service_repository::InMemoryServiceRepository;

//! # Application Services
//!
//! Use cases built on the domain layer.
//!
//! - [`quote_service`]: Catalog lookup and pricing

pub mod quote_service;

pub use quote_service::{QuoteRequest, QuoteService};

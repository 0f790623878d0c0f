//! # Domain Entities
//!
//! Catalog entities and the caller's configuration.
//!
//! ## Catalog
//!
//! - [`ServiceDefinition`]: A priced service with its attribute template
//! - [`ServiceTemplate`]: Ordered, validated attribute list
//! - [`ServiceAttribute`] / [`AttributeOption`]: One configurable dimension
//!
//! ## Requests
//!
//! - [`Configuration`]: Caller-supplied selections
//! - [`Selection`]: A selection resolved against its attribute

pub mod configuration;
pub mod service;
pub mod service_attribute;

pub use configuration::{ConfigValue, Configuration, Selection};
pub use service::{ServiceDefinition, ServiceTemplate};
pub use service_attribute::{AttributeOption, ServiceAttribute};

//! # Infrastructure Layer
//!
//! Adapters around the pricing core.
//!
//! - [`persistence`]: Service catalog repositories
//! - [`catalog`]: Catalog file loading and seeding
//! - [`config`]: Layered settings
//! - [`logging`]: Tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod logging;
pub mod persistence;

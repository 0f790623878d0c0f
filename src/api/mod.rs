//! # API Layer
//!
//! Transport adapters.
//!
//! - [`rest`]: HTTP/JSON endpoints

pub mod rest;

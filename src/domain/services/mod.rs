//! # Domain Services
//!
//! Domain services encapsulating business logic that doesn't naturally
//! belong to a single entity or value object.
//!
//! ## Services
//!
//! - [`PriceQuoteEngine`]: Attribute-driven unit and total price computation

pub mod price_quote;

pub use price_quote::{PriceAdjustment, PriceQuote, PriceQuoteEngine, compute_quote};

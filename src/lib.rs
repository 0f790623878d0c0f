//! # Hauze Quote
//!
//! Pricing engine for configurable service orders.
//!
//! A service has a base price and an ordered template of attributes. Callers
//! pick values for those attributes; each chosen value may carry a price
//! impact (`fixed`, `percentage`, `multiplier` or `per_unit`) that is applied
//! to the running unit price in template order. The result is a rounded,
//! non-negative unit price and total price.
//!
//! # Layers
//!
//! - [`domain`]: Value objects, the service template model, and the
//!   [`PriceQuoteEngine`](domain::services::PriceQuoteEngine)
//! - [`application`]: Catalog-backed quote use cases
//! - [`infrastructure`]: Catalog repository, catalog files, settings, logging
//! - [`api`]: REST endpoints
//!
//! # Examples
//!
//! ```
//! use hauze_quote::domain::entities::{AttributeOption, Configuration, ServiceAttribute, ServiceTemplate};
//! use hauze_quote::domain::services::PriceQuoteEngine;
//! use hauze_quote::domain::value_objects::{Price, enums::ImpactKind};
//! use rust_decimal::Decimal;
//!
//! let template = ServiceTemplate::new(vec![ServiceAttribute::select(
//!     "a1",
//!     "Kat Sayısı",
//!     vec![AttributeOption::new("Çift", Decimal::new(15, 1), ImpactKind::Multiplier)],
//! )])
//! .unwrap();
//! let config = Configuration::new().with("Kat Sayısı", "Çift");
//!
//! let quote = PriceQuoteEngine::default()
//!     .compute_quote(Price::new(Decimal::new(50, 0)).unwrap(), &template, &config, Some(Decimal::new(3, 0)))
//!     .unwrap();
//! assert_eq!(quote.unit_price().get(), Decimal::new(75, 0));
//! assert_eq!(quote.total_price().get(), Decimal::new(225, 0));
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

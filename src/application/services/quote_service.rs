//! # Quote Service
//!
//! Looks services up in the catalog and prices caller configurations.
//!
//! This is the use-case layer between transports (REST, CLI) and the
//! [`PriceQuoteEngine`]. It owns no state beyond the repository handle and
//! the engine's quantity policy.
//!
//! # Examples
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use hauze_quote::application::services::{QuoteRequest, QuoteService};
//! use hauze_quote::domain::entities::{Configuration, ServiceDefinition, ServiceTemplate};
//! use hauze_quote::domain::services::PriceQuoteEngine;
//! use hauze_quote::domain::value_objects::{Price, ServiceId};
//! use hauze_quote::infrastructure::persistence::in_memory::InMemoryServiceRepository;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let service = ServiceDefinition::new(
//!     "temizlik",
//!     "Ev Temizliği",
//!     Price::new(Decimal::new(100, 0)).unwrap(),
//!     ServiceTemplate::empty(),
//! );
//! let repo = Arc::new(InMemoryServiceRepository::with_services([service]));
//! let quotes = QuoteService::new(repo, PriceQuoteEngine::default());
//!
//! let request = QuoteRequest::new(Configuration::new(), Some(Decimal::new(2, 0)));
//! let quote = quotes.quote(&ServiceId::new("temizlik"), &request).await.unwrap();
//! assert_eq!(quote.total_price().get(), Decimal::new(200, 0));
//! # }
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{Configuration, ServiceDefinition};
use crate::domain::errors::DomainError;
use crate::domain::services::{PriceQuote, PriceQuoteEngine};
use crate::domain::value_objects::{RequestedQuantity, ServiceId};
use crate::infrastructure::persistence::ServiceRepository;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A request to price one service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Attribute name to value.
    #[serde(default)]
    pub config: Configuration,
    /// Requested quantity, normalized by the engine's policy. Any JSON value
    /// is accepted here.
    #[serde(default)]
    pub quantity: RequestedQuantity,
}

impl QuoteRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(config: Configuration, quantity: Option<Decimal>) -> Self {
        Self {
            config,
            quantity: quantity.into(),
        }
    }
}

/// Prices configurations for catalog services.
#[derive(Debug, Clone)]
pub struct QuoteService {
    repository: Arc<dyn ServiceRepository>,
    engine: PriceQuoteEngine,
}

impl QuoteService {
    /// Creates a quote service over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn ServiceRepository>, engine: PriceQuoteEngine) -> Self {
        Self { repository, engine }
    }

    /// Returns the pricing engine.
    #[inline]
    #[must_use]
    pub const fn engine(&self) -> PriceQuoteEngine {
        self.engine
    }

    /// Prices `request` for the service with `service_id`.
    ///
    /// Configuration keys that do not name a template attribute are ignored.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if the service is not in the catalog
    /// - `ApplicationError::Domain` if the configuration or quantity is
    ///   rejected, or the arithmetic overflows
    /// - `ApplicationError::Repository` if the catalog backend fails
    #[tracing::instrument(skip(self, request), fields(service_id = %service_id))]
    pub async fn quote(
        &self,
        service_id: &ServiceId,
        request: &QuoteRequest,
    ) -> ApplicationResult<PriceQuote> {
        let service = self.get_service(service_id).await?;

        let unknown = request.config.unknown_keys(service.template());
        if !unknown.is_empty() {
            tracing::warn!(keys = ?unknown, "ignoring configuration keys not in template");
        }

        match self
            .engine
            .quote_service(&service, &request.config, request.quantity)
        {
            Ok(quote) => {
                tracing::debug!(
                    unit_price = %quote.unit_price(),
                    total_price = %quote.total_price(),
                    quantity = %quote.quantity(),
                    "quote computed"
                );
                Ok(quote)
            }
            Err(err @ DomainError::Arithmetic(_)) => {
                tracing::error!(error = %err, "quote arithmetic failed");
                Err(err.into())
            }
            Err(err) => {
                tracing::info!(error = %err, "quote rejected");
                Err(err.into())
            }
        }
    }

    /// Returns all services, sorted by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the catalog backend fails.
    pub async fn list_services(&self) -> ApplicationResult<Vec<ServiceDefinition>> {
        Ok(self.repository.get_all().await?)
    }

    /// Returns the service with `service_id`.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if the service is not in the catalog
    /// - `ApplicationError::Repository` if the catalog backend fails
    pub async fn get_service(&self, service_id: &ServiceId) -> ApplicationResult<ServiceDefinition> {
        self.repository
            .get(service_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Service", service_id.as_str()))
    }
}

//! # REST Handlers
//!
//! Request handlers, DTOs, and the error-to-response mapping.

use crate::application::error::ApplicationError;
use crate::application::services::{QuoteRequest, QuoteService};
use crate::domain::entities::ServiceDefinition;
use crate::domain::errors::DomainError;
use crate::domain::services::{PriceAdjustment, PriceQuote};
use crate::domain::value_objects::{Price, Quantity, ServiceId};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quote use cases.
    pub quote_service: QuoteService,
}

impl AppState {
    /// Creates the state.
    #[must_use]
    pub fn new(quote_service: QuoteService) -> Self {
        Self { quote_service }
    }
}

/// Query parameters for the quote endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct QuoteParams {
    /// Include the quantity and the per-attribute breakdown.
    #[serde(default)]
    pub detailed: bool,
}

/// Quote endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Rounded unit price.
    pub unit_price: Price,
    /// Rounded total price.
    pub total_price: Price,
    /// Normalized quantity, when detailed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    /// Applied adjustments, when detailed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<PriceAdjustment>>,
}

impl QuoteResponse {
    /// Builds a response, keeping the breakdown only if `detailed`.
    #[must_use]
    pub fn from_quote(quote: PriceQuote, detailed: bool) -> Self {
        let unit_price = quote.unit_price();
        let total_price = quote.total_price();
        if detailed {
            let quantity = quote.quantity();
            Self {
                unit_price,
                total_price,
                quantity: Some(quantity),
                breakdown: Some(quote.into_breakdown()),
            }
        } else {
            Self {
                unit_price,
                total_price,
                quantity: None,
                breakdown: None,
            }
        }
    }
}

/// Catalog listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    /// Service ID.
    pub id: ServiceId,
    /// Display name.
    pub name: String,
    /// Starting unit price.
    pub base_price: Price,
    /// Number of template attributes.
    pub attribute_count: usize,
    /// Names of required attributes.
    pub required_attributes: Vec<String>,
}

impl From<&ServiceDefinition> for ServiceSummary {
    fn from(service: &ServiceDefinition) -> Self {
        Self {
            id: service.id().clone(),
            name: service.name().to_string(),
            base_price: service.base_price(),
            attribute_count: service.template().len(),
            required_attributes: service
                .template()
                .required_names()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Server time.
    pub timestamp: DateTime<Utc>,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Handler error.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read as a quote request.
    BadRequest(String),
    /// Use-case failure.
    Application(ApplicationError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Application(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Application(err) if err.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Application(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::BadRequest(message) => ErrorResponse {
                code: "BAD_REQUEST".to_string(),
                message: message.clone(),
            },
            Self::Application(ApplicationError::Domain(DomainError::Arithmetic(_))) => {
                ErrorResponse {
                    code: "ARITHMETIC_ERROR".to_string(),
                    message: "price could not be computed".to_string(),
                }
            }
            Self::Application(err) => ErrorResponse {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

/// `POST /api/v1/services/{id}/quote`
///
/// # Errors
///
/// See [`ApiError::status`] for the status mapping.
pub async fn quote_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<QuoteParams>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(request) = payload?;
    let quote = state
        .quote_service
        .quote(&ServiceId::new(id), &request)
        .await?;
    Ok(Json(QuoteResponse::from_quote(quote, params.detailed)))
}

/// `GET /api/v1/services`
///
/// # Errors
///
/// Returns 500 if the catalog backend fails.
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceSummary>>, ApiError> {
    let services = state.quote_service.list_services().await?;
    Ok(Json(services.iter().map(ServiceSummary::from).collect()))
}

/// `GET /api/v1/services/{id}`
///
/// # Errors
///
/// Returns 404 for an unknown service.
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ServiceDefinition>, ApiError> {
    let service = state.quote_service.get_service(&ServiceId::new(id)).await?;
    Ok(Json(service))
}

/// `GET /api/v1/health`
#[allow(clippy::unused_async)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

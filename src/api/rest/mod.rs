//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Services
//! - `GET /api/v1/services` - List catalog services
//! - `GET /api/v1/services/{id}` - Get a service with its template
//! - `POST /api/v1/services/{id}/quote` - Price a configuration
//!   (`?detailed=true` adds the quantity and breakdown)
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Errors
//!
//! Failures return an [`ErrorResponse`] body:
//!
//! | Cause | Status |
//! |-------|--------|
//! | Malformed body | 400 |
//! | Unknown service | 404 |
//! | Validation or quantity rejected | 422 |
//! | Arithmetic overflow, backend failure | 500 |
//!
//! # Usage
//!
//! ```ignore
//! use hauze_quote::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(quote_service));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, ErrorResponse, HealthResponse, QuoteParams, QuoteResponse, ServiceSummary,
};
pub use routes::create_router;

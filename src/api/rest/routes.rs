//! # REST Routes
//!
//! Router assembly and HTTP middleware.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use axum::routing::{get, post};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Builds the REST router.
///
/// Every request gets a span carrying a fresh `request_id`.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api/v1/services", get(handlers::list_services))
        .route("/api/v1/services/{id}", get(handlers::get_service))
        .route("/api/v1/services/{id}/quote", post(handlers::quote_service))
        .layer(ServiceBuilder::new().layer(trace).layer(cors))
        .with_state(state)
}

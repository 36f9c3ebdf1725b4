//! API module
//!
//! Contains the HTTP request handlers and the route table for the public site API.

pub mod diagnostics;
pub mod handlers;
pub mod leads;
pub mod middleware;
pub mod services;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Greeting endpoint
pub const HELLO_PATH: &str = "/api/hello";
/// Service catalog endpoint
pub const SERVICES_PATH: &str = "/api/services";
/// Lead capture endpoint
pub const LEAD_PATH: &str = "/api/lead";
/// Diagnostic probe endpoint
pub const DIAGNOSTICS_PATH: &str = "/test";

/// Endpoints advertised by `GET /`
pub const ENDPOINTS: &[&str] = &[HELLO_PATH, SERVICES_PATH, LEAD_PATH, DIAGNOSTICS_PATH];

/// Build the route table with tracing and CORS applied
///
/// CORS mirrors the request origin and allows credentials, any method and
/// any header. The request-id layer is outermost so the trace span can
/// record the id.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(HELLO_PATH, get(handlers::hello))
        .route(SERVICES_PATH, get(services::list_services))
        .route(LEAD_PATH, post(leads::create_lead))
        .route(DIAGNOSTICS_PATH, get(diagnostics::test_database))
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    request_id = %middleware::request_id_of(request.headers()),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(axum::middleware::from_fn(middleware::request_id))
        .with_state(state)
}

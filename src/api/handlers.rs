//! Static informational handlers

use super::ENDPOINTS;
use axum::response::Json;
use serde::Serialize;

/// Service name reported by `GET /`
pub const SERVICE_NAME: &str = "Flooring Pro API";

/// Response for `GET /`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service name
    pub name: &'static str,
    /// Status message
    pub message: &'static str,
    /// Available endpoint paths
    pub endpoints: &'static [&'static str],
}

/// Response for `GET /api/hello`
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Greeting text
    pub message: &'static str,
}

/// GET / - Service descriptor
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: SERVICE_NAME,
        message: "Backend running",
        endpoints: ENDPOINTS,
    })
}

/// GET /api/hello - Fixed greeting
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from the backend API!",
    })
}

//! Service catalog API handler

use crate::catalog::ServiceOffering;
use crate::state::AppState;
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// GET /api/services - Full catalog in declaration order
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Json<&'static [ServiceOffering]> {
    Json(state.catalog.services())
}

//! Lead capture API handler

use crate::error::AppError;
use crate::leads::{LeadSubmission, LEAD_COLLECTION};
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Response for a stored lead
#[derive(Debug, Serialize)]
pub struct LeadCreatedResponse {
    /// Always "ok"
    pub status: &'static str,
    /// Identifier returned by the document store
    pub id: String,
}

/// POST /api/lead - Validate and store a lead
///
/// A payload that fails to parse never reaches the store. Store failures are
/// returned as 500 with the store's message as detail; nothing is retried.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<Json<LeadCreatedResponse>, AppError> {
    let Json(lead) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected lead payload");
        AppError::from(rejection)
    })?;

    let result = match state.store() {
        Some(store) => {
            store
                .create_document(LEAD_COLLECTION, lead.into_record())
                .await
        }
        None => Err(StoreError::NotConfigured),
    };

    match result {
        Ok(id) => {
            info!(lead_id = %id, "Lead stored");
            Ok(Json(LeadCreatedResponse { status: "ok", id }))
        }
        Err(e) => {
            error!(error = %e, "Failed to store lead");
            Err(AppError::WriteFailed(e))
        }
    }
}

//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Lead payload failed schema checks
    #[error("Invalid lead: {message}")]
    InvalidLead {
        /// Status chosen by the JSON extractor (400, 415 or 422)
        status: StatusCode,
        /// Description of what was wrong with the payload
        message: String,
    },

    /// The document store failed to persist a record
    #[error("Write failed: {0}")]
    WriteFailed(#[from] crate::store::StoreError),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidLead { status, .. } => *status,
            AppError::WriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Underlying cause, without the variant prefix
    pub fn detail(&self) -> String {
        match self {
            AppError::InvalidLead { message, .. } => message.clone(),
            AppError::WriteFailed(e) => e.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidLead {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "error": self.to_string(),
            "detail": self.detail(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

//! Diagnostic probe
//!
//! `GET /test` reports whether the document store is reachable. Every failure
//! is folded into the report; the endpoint itself always answers 200.

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Serialize, Serializer};
use std::env;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Maximum number of collection names included in the report
pub const MAX_COLLECTIONS: usize = 10;

/// Maximum number of characters of a store error shown in the report
pub const MAX_ERROR_CHARS: usize = 50;

/// Store availability as seen by the probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// No store handle configured
    NotAvailable,
    /// Handle present but not ready
    Uninitialized,
    /// Handle ready and collections listed
    Connected,
    /// Handle ready but listing collections failed
    ConnectedWithError(String),
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::NotAvailable => f.write_str("❌ Not Available"),
            DatabaseStatus::Uninitialized => f.write_str("⚠️  Available but not initialized"),
            DatabaseStatus::Connected => f.write_str("✅ Connected & Working"),
            DatabaseStatus::ConnectedWithError(e) => {
                write!(f, "⚠️  Connected but Error: {}", e)
            }
        }
    }
}

impl Serialize for DatabaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Response for `GET /test`
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    /// Process status, always running when this is served
    pub backend: &'static str,
    /// Store availability
    pub database: DatabaseStatus,
    /// Whether `DATABASE_URL` is set
    pub database_url: &'static str,
    /// Whether `DATABASE_NAME` is set
    pub database_name: &'static str,
    /// Store label when initialized
    pub database_label: Option<String>,
    /// "Connected" when the store handle is initialized
    pub connection_status: &'static str,
    /// Up to the first ten collection names
    pub collections: Vec<String>,
}

/// GET /test - Report store connectivity
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticReport> {
    Json(probe(&state).await)
}

/// Inspect the store handle and environment; never fails
///
/// Environment presence is read on every call, so it can differ from the
/// startup configuration.
pub async fn probe(state: &AppState) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: "✅ Running",
        database: DatabaseStatus::NotAvailable,
        database_url: presence("DATABASE_URL"),
        database_name: presence("DATABASE_NAME"),
        database_label: None,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    let Some(store) = state.store() else {
        return report;
    };

    if !store.is_initialized() {
        report.database = DatabaseStatus::Uninitialized;
        return report;
    }

    report.connection_status = "Connected";
    report.database_label = store.name().map(str::to_string);

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = DatabaseStatus::Connected;
        }
        Err(e) => {
            warn!(error = %e, "Diagnostic probe could not list collections");
            let message: String = e.reason().chars().take(MAX_ERROR_CHARS).collect();
            report.database = DatabaseStatus::ConnectedWithError(message);
        }
    }

    report
}

/// Any non-empty value counts as set, whitespace included
fn presence(key: &str) -> &'static str {
    if env::var(key).is_ok_and(|v| !v.is_empty()) {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

//! Document store
//!
//! The persistence seam used by the lead endpoint and the diagnostic probe.
//! Handlers only see the [`DocumentStore`] trait; [`SqliteDocumentStore`] is
//! the bundled backend.

pub mod db;

pub use db::SqliteDocumentStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by a document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// No store handle is configured for this process
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables")]
    NotConfigured,

    /// Could not open or prepare the database
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The record cannot be stored as a document
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The backend rejected a query
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Underlying cause without the variant prefix
    ///
    /// Database errors report the driver's own message.
    pub fn reason(&self) -> String {
        match self {
            StoreError::NotConfigured => self.to_string(),
            StoreError::Connection(message) | StoreError::InvalidDocument(message) => {
                message.clone()
            }
            StoreError::Database(sqlx::Error::Database(e)) => e.message().to_string(),
            StoreError::Database(e) => e.to_string(),
        }
    }
}

/// Persistence backend contract
///
/// Writes return an opaque identifier. The remaining methods back the
/// diagnostic probe and may fail independently of writes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `record` under `collection` and return its identifier
    async fn create_document(&self, collection: &str, record: Value) -> Result<String, StoreError>;

    /// Whether the backend is ready to serve requests
    fn is_initialized(&self) -> bool;

    /// Database label, only when initialized
    fn name(&self) -> Option<&str>;

    /// Names of collections holding at least one document, sorted
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}

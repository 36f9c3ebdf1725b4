//! Lead data models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Collection every lead is written to
pub const LEAD_COLLECTION: &str = "lead";

/// Contact form data from a prospective customer
///
/// Only typing is enforced: `name` and `email` must be present strings, the
/// rest are optional strings. Unknown fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    /// Customer name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Catalog slug of the service the customer asked about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Free-form request details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LeadSubmission {
    /// Convert the submission into the document handed to the store
    pub fn into_record(self) -> Value {
        // Serializing a struct of strings cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

//! Lead capture
//!
//! The contact form payload submitted by prospective customers.

pub mod models;

pub use models::{LeadSubmission, LEAD_COLLECTION};

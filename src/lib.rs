//! Flooring Pro Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod leads;
/// Application state management
///
/// Holds the configuration snapshot, catalog, and document store handle.
pub mod state;
pub mod store;

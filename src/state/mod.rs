// State management module
// Holds the configuration, catalog, and store handle shared by handlers

pub mod app_state;

pub use app_state::AppState;

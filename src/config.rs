//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::catalog::Locale;
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Document store configuration
    pub database: DatabaseConfig,
    /// Service catalog configuration
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Document store configuration
///
/// Both values are optional; the service runs without a store and reports
/// the gap through the diagnostic endpoint.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Connection URL (`DATABASE_URL`)
    pub url: Option<String>,
    /// Database label (`DATABASE_NAME`)
    pub name: Option<String>,
}

/// Service catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Which localized catalog this deployment serves
    pub locale: Locale,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                url: non_empty_var("DATABASE_URL"),
                name: non_empty_var("DATABASE_NAME"),
            },
            catalog: CatalogConfig {
                locale: env::var("CATALOG_LOCALE")
                    .ok()
                    .and_then(|l| l.parse().ok())
                    .unwrap_or_default(),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8000,
                host: "0.0.0.0".to_string(),
            },
            database: DatabaseConfig::default(),
            catalog: CatalogConfig {
                locale: Locale::default(),
            },
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

//! Flooring Pro Backend
//!
//! A REST API for a flooring-company marketing site.
//! Serves the service catalog and stores lead-capture form submissions.

use flooring_pro_backend::{
    api,
    config::Config,
    state::AppState,
    store::{DocumentStore, SqliteDocumentStore},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Open the document store if one is configured
///
/// A connection failure is logged and the service keeps running without a
/// store; lead writes then fail and `/test` reports the gap.
async fn open_store(config: &Config) -> Option<Arc<SqliteDocumentStore>> {
    let url = config.database.url.as_deref()?;
    match SqliteDocumentStore::connect(url, config.database.name.as_deref()).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            warn!("Document store unavailable: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let store = open_store(&config).await;
    let handle = store.clone().map(|s| s as Arc<dyn DocumentStore>);
    let app_state = Arc::new(AppState::new(config.clone(), handle));
    info!(
        locale = %app_state.catalog.locale(),
        services = app_state.catalog.services().len(),
        "Catalog loaded"
    );

    let app = api::router(app_state);

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    info!("🚀 Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = store {
        store.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

//! Oracle Gateway - read-only trace and HITL event API.
//!
//! Serves the compiled-in sample dataset unless `DATA_PATH` points at a
//! dataset file. See [`oracle_gateway::config`] for the other variables.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oracle_gateway::{create_router, GatewayConfig, GatewayState};
use oracle_query::QueryService;
use oracle_store::MemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,oracle=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Oracle Gateway");

    let config = GatewayConfig::from_env()?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        cors_origins = ?config.cors_origins,
        request_timeout_seconds = config.request_timeout_seconds,
        data_path = ?config.data_path,
        "Gateway configuration loaded"
    );

    let store = match &config.data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading dataset file");
            MemoryStore::open(path)?
        }
        None => {
            tracing::warn!("No DATA_PATH set - serving the built-in sample dataset");
            MemoryStore::sample()?
        }
    };

    let queries = Arc::new(QueryService::with_defaults(Arc::new(store)));

    let listen_addr = config.listen_addr.clone();
    let state = GatewayState::new(queries, config);
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

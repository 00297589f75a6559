//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use oracle_query::TraceQueries;

use crate::state::GatewayState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler.
///
/// # Example
///
/// ```text
/// GET /api/health
///
/// Response: 200 OK
/// {
///   "status": "healthy",
///   "service": "LLM Tracing API",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health<Q>(State(state): State<Arc<GatewayState<Q>>>) -> impl IntoResponse
where
    Q: TraceQueries + 'static,
{
    let response = HealthResponse {
        status: "healthy",
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;
    use oracle_query::QueryService;
    use oracle_store::MemoryStore;

    #[tokio::test]
    async fn health_returns_ok() {
        let queries = Arc::new(QueryService::with_defaults(Arc::new(
            MemoryStore::default(),
        )));
        let state = Arc::new(GatewayState::new(queries, GatewayConfig::default()));

        let response = health(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use oracle_query::TraceQueries;

use crate::handlers::{categories, health, hitl, jobs};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// - `GET /api/health` - Health check
/// - `GET /api/jobs` - List job ids
/// - `GET /api/job/{job_id}` - Get job
/// - `GET /api/job/{job_id}/trajectories` - Get categorized trajectory
/// - `GET /api/job/{job_id}/summary` - Get trajectory summary
/// - `GET /api/tool-categories` - Tool category table
/// - `GET /api/sentiments` - Counts per sentiment
/// - `GET /api/hitl-events` - Events across sentiments, newest first
/// - `GET /api/hitl-events/{sentiment}` - Events for one sentiment
pub fn create_router<Q>(state: GatewayState<Q>) -> Router
where
    Q: TraceQueries + 'static,
{
    // Extract config values before moving state
    let cors = build_cors_layer(&state.config.cors_origins);
    let request_timeout = state.config.request_timeout();

    let state = Arc::new(state);

    Router::new()
        .route("/api/health", get(health::health::<Q>))
        // Jobs
        .route("/api/jobs", get(jobs::list_jobs::<Q>))
        .route("/api/job/{job_id}", get(jobs::get_job::<Q>))
        .route(
            "/api/job/{job_id}/trajectories",
            get(jobs::get_trajectories::<Q>),
        )
        .route("/api/job/{job_id}/summary", get(jobs::get_summary::<Q>))
        .route("/api/tool-categories", get(categories::tool_categories))
        // HITL events
        .route("/api/sentiments", get(hitl::list_sentiments::<Q>))
        .route("/api/hitl-events", get(hitl::all_events::<Q>))
        .route(
            "/api/hitl-events/{sentiment}",
            get(hitl::events_by_sentiment::<Q>),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
    use axum::http::Request;
    use oracle_query::QueryService;
    use oracle_store::MemoryStore;
    use tower::ServiceExt;

    use crate::config::GatewayConfig;

    fn router(config: GatewayConfig) -> Router {
        let store = Arc::new(MemoryStore::sample().unwrap());
        let queries = Arc::new(QueryService::with_defaults(store));
        create_router(GatewayState::new(queries, config))
    }

    async fn allowed_origin(app: Router, origin: &str) -> Option<HeaderValue> {
        let request = Request::builder()
            .uri("/api/health")
            .header(ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).cloned()
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let allowed = allowed_origin(router(GatewayConfig::default()), "http://x").await;
        assert_eq!(allowed, Some(HeaderValue::from_static("*")));
    }

    #[tokio::test]
    async fn cors_echoes_configured_origin() {
        let config = GatewayConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..GatewayConfig::default()
        };

        let allowed = allowed_origin(router(config.clone()), "http://localhost:3000").await;
        assert_eq!(
            allowed,
            Some(HeaderValue::from_static("http://localhost:3000"))
        );

        let foreign = allowed_origin(router(config), "https://elsewhere.example").await;
        assert_eq!(foreign, None);
    }
}

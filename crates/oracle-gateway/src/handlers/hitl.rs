//! HITL sentiment endpoints.
//!
//! `limit` must lie in `1..=100` and defaults to 20; anything else is a 400.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use oracle_core::SentimentEvent;
use oracle_query::TraceQueries;

use crate::error::ApiError;
use crate::state::GatewayState;

/// Label reported for the merged event list.
pub const ALL_SENTIMENTS: &str = "all";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query parameters for event listing.
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    /// Maximum number of events to return.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response for an event listing.
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    /// The requested sentiment, or `"all"`.
    pub sentiment: String,
    /// Number of events returned.
    pub count: usize,
    /// The events.
    pub events: Vec<SentimentEvent>,
}

impl EventsResponse {
    fn new(sentiment: impl Into<String>, events: Vec<SentimentEvent>) -> Self {
        Self {
            sentiment: sentiment.into(),
            count: events.len(),
            events,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List population counts per sentiment label.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn list_sentiments<Q>(
    State(state): State<Arc<GatewayState<Q>>>,
) -> Result<impl IntoResponse, ApiError>
where
    Q: TraceQueries + 'static,
{
    let counts = state.queries.sentiment_counts().await?;
    Ok(Json(counts))
}

/// List events for one sentiment, in stored order.
///
/// # Errors
///
/// Returns 404 for an unknown sentiment and 400 for an invalid limit.
pub async fn events_by_sentiment<Q>(
    State(state): State<Arc<GatewayState<Q>>>,
    Path(sentiment): Path<String>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    Q: TraceQueries + 'static,
{
    let Query(query) = query?;
    let events = state
        .queries
        .events_for_sentiment(&sentiment, query.limit)
        .await?;

    tracing::debug!(sentiment = %sentiment, count = events.len(), "Serving HITL events");

    Ok(Json(EventsResponse::new(sentiment, events)))
}

/// List events across all sentiments, newest first.
///
/// # Errors
///
/// Returns 400 for an invalid limit.
pub async fn all_events<Q>(
    State(state): State<Arc<GatewayState<Q>>>,
    query: Result<Query<EventQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    Q: TraceQueries + 'static,
{
    let Query(query) = query?;
    let events = state.queries.recent_events(query.limit).await?;
    Ok(Json(EventsResponse::new(ALL_SENTIMENTS, events)))
}

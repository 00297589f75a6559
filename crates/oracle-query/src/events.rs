//! Event limit validation and merging.

use oracle_core::SentimentEvent;

use crate::error::{QueryError, Result};
use crate::types::QueryConfig;

/// Smallest accepted event limit.
pub const MIN_EVENT_LIMIT: usize = 1;

/// Resolve a caller-supplied limit against the configured default and maximum.
///
/// # Errors
///
/// Returns `QueryError::InvalidLimit` if the limit is below 1 or above the maximum.
pub fn resolve_limit(requested: Option<usize>, config: &QueryConfig) -> Result<usize> {
    let limit = requested.unwrap_or(config.default_event_limit);
    if (MIN_EVENT_LIMIT..=config.max_event_limit).contains(&limit) {
        Ok(limit)
    } else {
        Err(QueryError::InvalidLimit {
            limit,
            min: MIN_EVENT_LIMIT,
            max: config.max_event_limit,
        })
    }
}

/// Sort events newest first and keep at most `limit`.
///
/// The sort is stable: events with equal timestamps keep their stored order.
#[must_use]
pub fn latest_first(mut events: Vec<SentimentEvent>, limit: usize) -> Vec<SentimentEvent> {
    events.sort_by(|a, b| b.event_timestamp.cmp(&a.event_timestamp));
    events.truncate(limit);
    events
}

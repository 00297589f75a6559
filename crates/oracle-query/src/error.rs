//! Error types for trace and event queries.
//!
//! Display strings are the human-readable details returned to API clients.

use oracle_core::JobId;
use oracle_store::StoreError;
use thiserror::Error;

/// A result type using `QueryError`.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors that can occur while answering a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// No job with this id exists.
    #[error("Job {0} not found")]
    JobNotFound(JobId),

    /// Neither a trajectory nor a job exists for this id.
    #[error("Trajectories for job {0} not found")]
    TrajectoryNotFound(JobId),

    /// No event bucket exists for this sentiment label.
    #[error("Sentiment {0} not found")]
    SentimentNotFound(String),

    /// The requested event limit is outside the accepted range.
    #[error("limit must be between {min} and {max}, got {limit}")]
    InvalidLimit {
        /// The requested limit.
        limit: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// The backing store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl QueryError {
    /// Whether the error reports a missing resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::JobNotFound(_) | Self::TrajectoryNotFound(_) | Self::SentimentNotFound(_)
        )
    }
}

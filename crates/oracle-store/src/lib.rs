//! Read-only repository for the oracle trace API.
//!
//! This crate provides the tables the API serves: jobs, their trajectories,
//! sentiment counts and sample HITL events. Tables are loaded from a JSON
//! [`Dataset`], either the compiled-in sample or a file on disk, and held in
//! memory by [`MemoryStore`].
//!
//! # Tables
//!
//! - `jobs`: job records, keyed by `job_id`
//! - `trajectories`: ordered steps, keyed by `job_id`
//! - `sentiment_counts`: population count per sentiment label
//! - `hitl_events`: sample events, keyed by sentiment label, latest first
//!
//! # Example
//!
//! ```
//! use oracle_core::JobId;
//! use oracle_store::{MemoryStore, Store};
//!
//! let store = MemoryStore::sample().unwrap();
//! let job = store.get_job(&JobId::new("demo-job-123").unwrap()).unwrap();
//! assert!(job.is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dataset;
pub mod error;
pub mod memory;

pub use dataset::Dataset;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;

use oracle_core::{Job, JobId, SentimentCount, SentimentEvent, TrajectoryStep};

/// The storage trait defining all read operations.
///
/// This trait abstracts the data source so the query layer can be backed by a
/// warehouse or database without touching aggregation logic.
pub trait Store: Send + Sync {
    // =========================================================================
    // Job Operations
    // =========================================================================

    /// List all job ids in listing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source fails.
    fn list_job_ids(&self) -> Result<Vec<JobId>>;

    /// Get a job by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source fails.
    fn get_job(&self, job_id: &JobId) -> Result<Option<Job>>;

    /// Get the stored trajectory of a job, in chronological order.
    ///
    /// Returns `None` when no trajectory is stored under the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source fails.
    fn get_trajectory(&self, job_id: &JobId) -> Result<Option<Vec<TrajectoryStep>>>;

    // =========================================================================
    // HITL Event Operations
    // =========================================================================

    /// Population counts per sentiment label, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source fails.
    fn sentiment_counts(&self) -> Result<Vec<SentimentCount>>;

    /// The first `limit` events stored under a sentiment label.
    ///
    /// Returns `None` when no bucket exists for the label.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source fails.
    fn list_events_by_sentiment(
        &self,
        sentiment: &str,
        limit: usize,
    ) -> Result<Option<Vec<SentimentEvent>>>;

    /// Every stored event, bucket by bucket. Not sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source fails.
    fn list_all_events(&self) -> Result<Vec<SentimentEvent>>;
}

//! In-memory store implementation.
//!
//! Tables are built once from a [`Dataset`] and never written afterwards, so a
//! `MemoryStore` can be shared across tasks behind an `Arc` without locking.

use std::path::Path;

use indexmap::IndexMap;
use oracle_core::{Job, JobId, SentimentCount, SentimentEvent, TrajectoryStep};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::Store;

/// Read-only store over in-memory tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    jobs: IndexMap<JobId, Job>,
    trajectories: IndexMap<JobId, Vec<TrajectoryStep>>,
    sentiment_counts: Vec<SentimentCount>,
    events: IndexMap<String, Vec<SentimentEvent>>,
}

impl MemoryStore {
    /// Build a store from a dataset after validating it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidDataset` if the dataset breaks a table invariant.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        dataset.validate()?;

        let Dataset {
            jobs,
            trajectories,
            sentiment_counts,
            hitl_events,
        } = dataset;

        let store = Self {
            jobs: jobs.into_iter().map(|job| (job.job_id.clone(), job)).collect(),
            trajectories,
            sentiment_counts,
            events: hitl_events,
        };

        tracing::info!(
            jobs = store.jobs.len(),
            trajectories = store.trajectories.len(),
            sentiments = store.events.len(),
            "Loaded dataset"
        );

        Ok(store)
    }

    /// Open a store from a dataset file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading dataset file");
        Self::from_dataset(Dataset::from_path(path)?)
    }

    /// Open a store over the compiled-in sample dataset.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded dataset is malformed.
    pub fn sample() -> Result<Self> {
        Self::from_dataset(Dataset::sample()?)
    }
}

impl Store for MemoryStore {
    fn list_job_ids(&self) -> Result<Vec<JobId>> {
        Ok(self.jobs.keys().cloned().collect())
    }

    fn get_job(&self, job_id: &JobId) -> Result<Option<Job>> {
        Ok(self.jobs.get(job_id).cloned())
    }

    fn get_trajectory(&self, job_id: &JobId) -> Result<Option<Vec<TrajectoryStep>>> {
        Ok(self.trajectories.get(job_id).cloned())
    }

    fn sentiment_counts(&self) -> Result<Vec<SentimentCount>> {
        Ok(self.sentiment_counts.clone())
    }

    fn list_events_by_sentiment(
        &self,
        sentiment: &str,
        limit: usize,
    ) -> Result<Option<Vec<SentimentEvent>>> {
        Ok(self
            .events
            .get(sentiment)
            .map(|events| events.iter().take(limit).cloned().collect()))
    }

    fn list_all_events(&self) -> Result<Vec<SentimentEvent>> {
        Ok(self.events.values().flatten().cloned().collect())
    }
}

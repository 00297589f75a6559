//! Query service implementation.
//!
//! This module provides the `TraceQueries` trait and the `QueryService`
//! implementation that answers job, trajectory, summary and event queries
//! from a [`Store`].

use std::sync::Arc;

use async_trait::async_trait;
use oracle_core::{summarize, Job, JobId, SentimentCount, SentimentEvent, TrajectoryStep};
use oracle_store::Store;

use crate::error::{QueryError, Result};
use crate::events;
use crate::types::{CategorizedStep, JobSummary, QueryConfig};

/// Trait defining the read operations served by the API.
#[async_trait]
pub trait TraceQueries: Send + Sync {
    // =========================================================================
    // Jobs and Trajectories
    // =========================================================================

    /// List all job ids.
    async fn list_jobs(&self) -> Result<Vec<JobId>>;

    /// Get a job record.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::JobNotFound` if the job doesn't exist.
    async fn get_job(&self, job_id: &JobId) -> Result<Job>;

    /// Get a job's trajectory in chronological order.
    ///
    /// A known job without a stored trajectory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::TrajectoryNotFound` if neither a trajectory nor a
    /// job exists for the id.
    async fn get_trajectory(&self, job_id: &JobId) -> Result<Vec<TrajectoryStep>>;

    /// Get a job's trajectory with each step's tool category.
    ///
    /// # Errors
    ///
    /// Same as [`TraceQueries::get_trajectory`].
    async fn get_categorized_trajectory(&self, job_id: &JobId) -> Result<Vec<CategorizedStep>>;

    /// Summarize a job's trajectory.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::JobNotFound` if neither a trajectory nor a job
    /// exists for the id.
    async fn get_summary(&self, job_id: &JobId) -> Result<JobSummary>;

    // =========================================================================
    // HITL Events
    // =========================================================================

    /// Population counts per sentiment label.
    async fn sentiment_counts(&self) -> Result<Vec<SentimentCount>>;

    /// Events stored under a sentiment label, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidLimit` for an out-of-range limit and
    /// `QueryError::SentimentNotFound` if no bucket exists for the label.
    async fn events_for_sentiment(
        &self,
        sentiment: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SentimentEvent>>;

    /// Events across all sentiments, newest first.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidLimit` for an out-of-range limit.
    async fn recent_events(&self, limit: Option<usize>) -> Result<Vec<SentimentEvent>>;
}

/// The main query service implementation.
pub struct QueryService<S: Store> {
    store: Arc<S>,
    config: QueryConfig,
}

impl<S: Store> QueryService<S> {
    /// Create a new query service.
    #[must_use]
    pub fn new(store: Arc<S>, config: QueryConfig) -> Self {
        Self { store, config }
    }

    /// Create with default configuration.
    #[must_use]
    pub fn with_defaults(store: Arc<S>) -> Self {
        Self::new(store, QueryConfig::default())
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Look up a job's record and trajectory together.
    ///
    /// Returns `None` only when both tables lack the id.
    fn resolve(&self, job_id: &JobId) -> Result<Option<(Option<Job>, Vec<TrajectoryStep>)>> {
        let job = self.store.get_job(job_id)?;
        let steps = self.store.get_trajectory(job_id)?;

        Ok(match (job, steps) {
            (None, None) => None,
            (job, steps) => Some((job, steps.unwrap_or_default())),
        })
    }
}

#[async_trait]
impl<S: Store + 'static> TraceQueries for QueryService<S> {
    async fn list_jobs(&self) -> Result<Vec<JobId>> {
        Ok(self.store.list_job_ids()?)
    }

    async fn get_job(&self, job_id: &JobId) -> Result<Job> {
        self.store
            .get_job(job_id)?
            .ok_or_else(|| QueryError::JobNotFound(job_id.clone()))
    }

    async fn get_trajectory(&self, job_id: &JobId) -> Result<Vec<TrajectoryStep>> {
        let (_, steps) = self
            .resolve(job_id)?
            .ok_or_else(|| QueryError::TrajectoryNotFound(job_id.clone()))?;

        tracing::debug!(job_id = %job_id, steps = steps.len(), "Loaded trajectory");
        Ok(steps)
    }

    async fn get_categorized_trajectory(&self, job_id: &JobId) -> Result<Vec<CategorizedStep>> {
        let steps = self.get_trajectory(job_id).await?;
        Ok(steps.into_iter().map(CategorizedStep::from).collect())
    }

    async fn get_summary(&self, job_id: &JobId) -> Result<JobSummary> {
        let (job_info, steps) = self
            .resolve(job_id)?
            .ok_or_else(|| QueryError::JobNotFound(job_id.clone()))?;

        let summary = summarize(&steps);

        tracing::debug!(
            job_id = %job_id,
            total_steps = summary.total_steps,
            success_rate = summary.success_rate,
            "Summarized trajectory"
        );

        Ok(JobSummary {
            job_id: job_id.clone(),
            job_info,
            summary,
        })
    }

    async fn sentiment_counts(&self) -> Result<Vec<SentimentCount>> {
        Ok(self.store.sentiment_counts()?)
    }

    async fn events_for_sentiment(
        &self,
        sentiment: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SentimentEvent>> {
        let limit = events::resolve_limit(limit, &self.config)?;

        self.store
            .list_events_by_sentiment(sentiment, limit)?
            .ok_or_else(|| QueryError::SentimentNotFound(sentiment.to_string()))
    }

    async fn recent_events(&self, limit: Option<usize>) -> Result<Vec<SentimentEvent>> {
        let limit = events::resolve_limit(limit, &self.config)?;
        let all = self.store.list_all_events()?;
        Ok(events::latest_first(all, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_store::{Dataset, MemoryStore, StoreError};

    const DEMO_JOB: &str = "demo-job-123";
    const TRYON_JOB: &str = "5d88a55f-1d3f-44da-bb03-4ff6a0697d3b";
    const QUEUED_JOB: &str = "queued-job-456";

    fn setup() -> QueryService<MemoryStore> {
        let store = Arc::new(MemoryStore::sample().unwrap());
        QueryService::with_defaults(store)
    }

    fn job_id(id: &str) -> JobId {
        JobId::new(id).unwrap()
    }

    #[tokio::test]
    async fn get_job_found_and_missing() {
        let service = setup();

        let job = service.get_job(&job_id(DEMO_JOB)).await.unwrap();
        assert_eq!(job.job_id.as_str(), DEMO_JOB);

        let result = service.get_job(&job_id("invalid-job-id-12345")).await;
        assert!(matches!(result, Err(QueryError::JobNotFound(id)) if id.as_str() == "invalid-job-id-12345"));
    }

    #[tokio::test]
    async fn list_jobs_matches_job_table() {
        let service = setup();
        let jobs = service.list_jobs().await.unwrap();
        assert_eq!(jobs.len(), 3);
        for id in &jobs {
            assert_eq!(&service.get_job(id).await.unwrap().job_id, id);
        }
    }

    #[tokio::test]
    async fn trajectory_for_unknown_job() {
        let service = setup();
        let result = service.get_trajectory(&job_id("nope")).await;
        assert!(matches!(result, Err(QueryError::TrajectoryNotFound(_))));

        let result = service.get_summary(&job_id("nope")).await;
        assert!(matches!(result, Err(QueryError::JobNotFound(_))));
    }

    #[tokio::test]
    async fn known_job_without_trajectory_is_empty() {
        let service = setup();

        let steps = service.get_trajectory(&job_id(QUEUED_JOB)).await.unwrap();
        assert!(steps.is_empty());

        let summary = service.get_summary(&job_id(QUEUED_JOB)).await.unwrap();
        assert!(summary.job_info.is_some());
        assert_eq!(summary.summary.total_steps, 0);
        assert!(summary.summary.success_rate.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn demo_job_summary() {
        let service = setup();
        let summary = service.get_summary(&job_id(DEMO_JOB)).await.unwrap();
        let stats = &summary.summary;

        assert_eq!(summary.job_id.as_str(), DEMO_JOB);
        assert_eq!(stats.total_steps, 14);
        assert_eq!(stats.successful_steps, 12);
        assert_eq!(stats.failed_steps, 1);
        assert_eq!(stats.unknown_steps, 1);
        assert!((stats.success_rate - 85.71).abs() < f64::EPSILON);
        assert_eq!(stats.total_duration_ms, 283_000);
        assert_eq!(stats.total_duration_formatted, "4m 43s");
        assert_eq!(stats.agent_counts.get("EmergentAssistant"), Some(&11));
        assert_eq!(stats.agent_counts.get("SkilledAssistant"), Some(&3));
    }

    #[tokio::test]
    async fn summary_matches_trajectory_length() {
        let service = setup();
        for id in service.list_jobs().await.unwrap() {
            let steps = service.get_trajectory(&id).await.unwrap();
            let summary = service.get_summary(&id).await.unwrap();
            assert_eq!(summary.summary.total_steps, steps.len() as u64);
        }

        let summary = service.get_summary(&job_id(TRYON_JOB)).await.unwrap();
        assert_eq!(summary.summary.function_counts.get("(empty)"), Some(&2));
    }

    #[tokio::test]
    async fn categorized_trajectory() {
        let service = setup();
        let steps = service
            .get_categorized_trajectory(&job_id(DEMO_JOB))
            .await
            .unwrap();

        assert_eq!(steps[0].step.function_name, "initial-llm");
        assert_eq!(steps[0].category, "reasoning");
        assert!(steps.iter().any(|s| s.category == "exit"));
    }

    #[tokio::test]
    async fn trajectory_without_job_record() {
        let dataset = Dataset::from_json(
            r#"{"trajectories": {"orphan": [{
                "created_at": "2026-01-20 14:30:05.000000 UTC",
                "agent_name": "EmergentAssistant",
                "request_id": "r1",
                "step_num": 0,
                "job_id": "orphan",
                "function_name": "think",
                "env_success": true
            }]}}"#,
        )
        .unwrap();
        let store = Arc::new(MemoryStore::from_dataset(dataset).unwrap());
        let service = QueryService::with_defaults(store);

        assert!(matches!(
            service.get_job(&job_id("orphan")).await,
            Err(QueryError::JobNotFound(_))
        ));

        let summary = service.get_summary(&job_id("orphan")).await.unwrap();
        assert!(summary.job_info.is_none());
        assert_eq!(summary.summary.total_steps, 1);
    }

    #[tokio::test]
    async fn events_for_sentiment_limited() {
        let service = setup();
        let events = service
            .events_for_sentiment("dissatisfied", Some(5))
            .await
            .unwrap();

        assert!(events.len() <= 5);
        assert!(events
            .iter()
            .all(|e| e.user_sentiment == ["dissatisfied"]));
    }

    #[tokio::test]
    async fn events_for_sentiment_keeps_stored_order() {
        let service = setup();
        let limited = service
            .events_for_sentiment("dissatisfied", Some(3))
            .await
            .unwrap();
        let all = service
            .events_for_sentiment("dissatisfied", None)
            .await
            .unwrap();
        assert_eq!(limited[..], all[..3]);
    }

    #[tokio::test]
    async fn unknown_sentiment() {
        let service = setup();
        let result = service.events_for_sentiment("ecstatic", None).await;
        assert!(matches!(result, Err(QueryError::SentimentNotFound(s)) if s == "ecstatic"));
    }

    #[tokio::test]
    async fn invalid_limits_rejected() {
        let service = setup();
        assert!(matches!(
            service.events_for_sentiment("neutral", Some(0)).await,
            Err(QueryError::InvalidLimit { .. })
        ));
        assert!(matches!(
            service.recent_events(Some(101)).await,
            Err(QueryError::InvalidLimit { .. })
        ));
    }

    #[tokio::test]
    async fn recent_events_sorted_desc() {
        let service = setup();
        let events = service.recent_events(Some(100)).await.unwrap();

        let total: usize = service.store().list_all_events().unwrap().len();
        assert_eq!(events.len(), total);
        assert!(events
            .windows(2)
            .all(|w| w[0].event_timestamp >= w[1].event_timestamp));
    }

    #[tokio::test]
    async fn recent_events_default_limit() {
        let config = QueryConfig {
            default_event_limit: 4,
            ..Default::default()
        };
        let service = QueryService::new(Arc::new(MemoryStore::sample().unwrap()), config);

        assert_eq!(service.recent_events(None).await.unwrap().len(), 4);
    }

    struct FailingStore;

    impl Store for FailingStore {
        fn list_job_ids(&self) -> oracle_store::Result<Vec<JobId>> {
            Err(StoreError::InvalidDataset("unavailable".into()))
        }
        fn get_job(&self, _: &JobId) -> oracle_store::Result<Option<Job>> {
            Err(StoreError::InvalidDataset("unavailable".into()))
        }
        fn get_trajectory(&self, _: &JobId) -> oracle_store::Result<Option<Vec<TrajectoryStep>>> {
            Err(StoreError::InvalidDataset("unavailable".into()))
        }
        fn sentiment_counts(&self) -> oracle_store::Result<Vec<SentimentCount>> {
            Err(StoreError::InvalidDataset("unavailable".into()))
        }
        fn list_events_by_sentiment(
            &self,
            _: &str,
            _: usize,
        ) -> oracle_store::Result<Option<Vec<SentimentEvent>>> {
            Err(StoreError::InvalidDataset("unavailable".into()))
        }
        fn list_all_events(&self) -> oracle_store::Result<Vec<SentimentEvent>> {
            Err(StoreError::InvalidDataset("unavailable".into()))
        }
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let service = QueryService::with_defaults(Arc::new(FailingStore));

        let err = service.get_summary(&job_id(DEMO_JOB)).await.unwrap_err();
        assert!(matches!(err, QueryError::Store(_)));
        assert!(!err.is_not_found());
    }
}

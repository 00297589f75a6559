//! On-disk dataset format.
//!
//! A dataset is a single JSON document holding every table:
//!
//! ```json
//! {
//!   "jobs": [ { "job_id": "...", "prompt_name": "...", "model_name": "..." } ],
//!   "trajectories": { "<job_id>": [ { "created_at": "...", "step_num": 0, ... } ] },
//!   "sentiment_counts": [ { "sentiment": "neutral", "count": 15420 } ],
//!   "hitl_events": { "<sentiment>": [ { "event_timestamp": "...", ... } ] }
//! }
//! ```
//!
//! Map and list order is preserved; it is the canonical order served by the API.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use oracle_core::{Job, JobId, SentimentCount, SentimentEvent, TrajectoryStep};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// The sample dataset compiled into the binary.
pub const SAMPLE_DATASET: &str = include_str!("../data/sample.json");

/// All tables of a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Job records, in listing order.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Steps per job, each list in chronological order.
    #[serde(default)]
    pub trajectories: IndexMap<JobId, Vec<TrajectoryStep>>,
    /// Population counts per sentiment label.
    #[serde(default)]
    pub sentiment_counts: Vec<SentimentCount>,
    /// Sample events per sentiment label, latest first.
    #[serde(default)]
    pub hitl_events: IndexMap<String, Vec<SentimentEvent>>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialization` if the JSON does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The compiled-in sample dataset.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded JSON is malformed.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_DATASET)
    }

    /// Check table invariants.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidDataset` if:
    /// - two jobs share an id
    /// - a step's `job_id` differs from the trajectory it is stored under
    /// - an event has no sentiment label, or lacks the label of its bucket
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(&job.job_id) {
                return Err(StoreError::InvalidDataset(format!(
                    "duplicate job id {}",
                    job.job_id
                )));
            }
        }

        for (job_id, steps) in &self.trajectories {
            if let Some(step) = steps.iter().find(|s| &s.job_id != job_id) {
                return Err(StoreError::InvalidDataset(format!(
                    "step {} of trajectory {job_id} belongs to job {}",
                    step.step_num, step.job_id
                )));
            }
        }

        for (sentiment, events) in &self.hitl_events {
            for event in events {
                if event.user_sentiment.is_empty() {
                    return Err(StoreError::InvalidDataset(format!(
                        "event {} has no sentiment label",
                        event.request_id
                    )));
                }
                if !event.has_sentiment(sentiment) {
                    return Err(StoreError::InvalidDataset(format!(
                        "event {} is stored under {sentiment} but labelled {:?}",
                        event.request_id, event.user_sentiment
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid() {
        let dataset = Dataset::sample().unwrap();
        dataset.validate().unwrap();
        assert_eq!(dataset.jobs.len(), 3);
        assert_eq!(dataset.trajectories.len(), 2);
        assert!(!dataset.hitl_events.is_empty());
    }

    #[test]
    fn empty_document_is_empty_dataset() {
        let dataset = Dataset::from_json("{}").unwrap();
        dataset.validate().unwrap();
        assert!(dataset.jobs.is_empty());
        assert!(dataset.hitl_events.is_empty());
    }

    #[test]
    fn rejects_duplicate_job_ids() {
        let dataset = Dataset::from_json(
            r#"{"jobs": [
                {"job_id": "a", "prompt_name": "p", "model_name": "m"},
                {"job_id": "a", "prompt_name": "q", "model_name": "m"}
            ]}"#,
        )
        .unwrap();

        let err = dataset.validate().unwrap_err();
        assert!(matches!(err, StoreError::InvalidDataset(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn rejects_step_under_wrong_job() {
        let dataset = Dataset::from_json(
            r#"{"trajectories": {"a": [{
                "created_at": "2026-01-20 14:30:05.000000 UTC",
                "agent_name": "EmergentAssistant",
                "request_id": "r1",
                "step_num": 0,
                "job_id": "b",
                "function_name": "think",
                "env_success": true
            }]}}"#,
        )
        .unwrap();

        assert!(matches!(
            dataset.validate(),
            Err(StoreError::InvalidDataset(_))
        ));
    }

    #[test]
    fn rejects_event_in_wrong_bucket() {
        let dataset = Dataset::from_json(
            r#"{"hitl_events": {"satisfied": [{
                "event_timestamp": "2026-01-22 10:00:00.000000 UTC",
                "request_id": "r1",
                "user_curr_message": "no",
                "agent_prev_message": "done",
                "user_sentiment": ["frustrated"]
            }]}}"#,
        )
        .unwrap();

        assert!(matches!(
            dataset.validate(),
            Err(StoreError::InvalidDataset(_))
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            Dataset::from_json("{\"jobs\": 3}"),
            Err(StoreError::Serialization(_))
        ));
    }
}

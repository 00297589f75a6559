//! Query configuration and result types.

use oracle_core::{categories, Job, JobId, TrajectoryStep, TrajectorySummary};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Configuration for the query service.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Events returned when the caller gives no limit.
    pub default_event_limit: usize,
    /// Largest limit a caller may request.
    pub max_event_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_event_limit: 20,
            max_event_limit: 100,
        }
    }
}

/// A trajectory step annotated with its tool category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedStep {
    /// The stored step.
    #[serde(flatten)]
    pub step: TrajectoryStep,
    /// Category of the step's function name.
    pub category: &'static str,
}

impl From<TrajectoryStep> for CategorizedStep {
    fn from(step: TrajectoryStep) -> Self {
        let category = categories::classify(&step.function_name);
        Self { step, category }
    }
}

/// Summary of one job: its record, if any, and trajectory statistics.
#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    /// The job the summary describes.
    pub job_id: JobId,
    /// The job record; serialized as `{}` when the job table has no entry.
    #[serde(serialize_with = "job_info_or_empty")]
    pub job_info: Option<Job>,
    /// Trajectory statistics.
    #[serde(flatten)]
    pub summary: TrajectorySummary,
}

#[allow(clippy::ref_option)]
fn job_info_or_empty<S: Serializer>(job: &Option<Job>, serializer: S) -> Result<S::Ok, S::Error> {
    match job {
        Some(job) => job.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_core::summarize;

    #[test]
    fn default_config() {
        let config = QueryConfig::default();
        assert_eq!(config.default_event_limit, 20);
        assert_eq!(config.max_event_limit, 100);
    }

    #[test]
    fn missing_job_info_is_empty_object() {
        let summary = JobSummary {
            job_id: JobId::new("orphan").unwrap(),
            job_info: None,
            summary: summarize(&[]),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["job_id"], "orphan");
        assert_eq!(value["job_info"], serde_json::json!({}));
        assert_eq!(value["total_steps"], 0);
        assert_eq!(value["total_duration_formatted"], "0m 0s");
    }
}

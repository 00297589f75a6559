//! Job and trajectory types.
//!
//! Field names follow the warehouse views the data is exported from
//! (`jobs_full_view` and `trajectories_full_view`), so records serialize to the
//! same JSON shape the dashboard already consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::JobId;

/// One traced agent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier for the job.
    pub job_id: JobId,
    /// Name of the prompt template that started the run.
    pub prompt_name: String,
    /// Model identifier, including any query-style options.
    pub model_name: String,
    /// Lifecycle status, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// Free-text description of the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Total spend for the run in US dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_usd: Option<f64>,
    /// When the job was created.
    #[serde(
        default,
        with = "crate::time::warehouse::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// When the job reached a terminal state.
    #[serde(
        default,
        with = "crate::time::warehouse::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Lifecycle status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepted but not started.
    Queued,
    /// Currently executing.
    Running,
    /// Finished normally.
    Completed,
    /// Finished with an error.
    Failed,
    /// Stopped before completion.
    Cancelled,
}

impl JobStatus {
    /// Whether the job can no longer change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

/// One recorded action within a job's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    /// When the step was recorded.
    #[serde(with = "crate::time::warehouse")]
    pub created_at: DateTime<Utc>,
    /// Agent that took the step.
    pub agent_name: String,
    /// Correlation id of the model request.
    pub request_id: String,
    /// Step index. Negative values mark pre-step events such as the initial
    /// model call; indices are not necessarily contiguous.
    pub step_num: i64,
    /// Job this step belongs to.
    pub job_id: JobId,
    /// Tool or function invoked. Empty for unnamed steps.
    #[serde(default)]
    pub function_name: String,
    /// Environment outcome: `true`, `false`, or `null` when unknown.
    #[serde(default)]
    pub env_success: Option<bool>,
    /// Wall-clock duration of the step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Prompt tokens consumed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    /// Completion tokens produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
}

impl TrajectoryStep {
    /// The step's tri-state outcome.
    #[must_use]
    pub const fn outcome(&self) -> StepOutcome {
        StepOutcome::from_env_success(self.env_success)
    }
}

/// Tri-state outcome of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// The environment reported success.
    Succeeded,
    /// The environment reported failure.
    Failed,
    /// No outcome was recorded.
    Unknown,
}

impl StepOutcome {
    /// Map the stored `env_success` flag onto an outcome.
    #[must_use]
    pub const fn from_env_success(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Succeeded,
            Some(false) => Self::Failed,
            None => Self::Unknown,
        }
    }
}

impl From<Option<bool>> for StepOutcome {
    fn from(flag: Option<bool>) -> Self {
        Self::from_env_success(flag)
    }
}

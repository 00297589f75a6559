//! Job and trajectory endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use oracle_core::JobId;
use oracle_query::TraceQueries;

use crate::error::ApiError;
use crate::state::GatewayState;

// =============================================================================
// Response Types
// =============================================================================

/// Response for the job list.
#[derive(Debug, Serialize)]
pub struct ListJobsResponse {
    /// Job ids in listing order.
    pub jobs: Vec<JobId>,
    /// Number of jobs.
    pub count: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// Parse a path id. An id that can never be stored is reported as missing.
fn parse_job_id(raw: &str, not_found: fn(&str) -> String) -> Result<JobId, ApiError> {
    JobId::new(raw).map_err(|_| ApiError::NotFound(not_found(raw)))
}

fn job_not_found(id: &str) -> String {
    format!("Job {id} not found")
}

fn trajectory_not_found(id: &str) -> String {
    format!("Trajectories for job {id} not found")
}

/// List the ids of all jobs.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn list_jobs<Q>(
    State(state): State<Arc<GatewayState<Q>>>,
) -> Result<impl IntoResponse, ApiError>
where
    Q: TraceQueries + 'static,
{
    let jobs = state.queries.list_jobs().await?;

    Ok(Json(ListJobsResponse {
        count: jobs.len(),
        jobs,
    }))
}

/// Get a job record.
///
/// # Errors
///
/// Returns 404 if the job doesn't exist.
pub async fn get_job<Q>(
    State(state): State<Arc<GatewayState<Q>>>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    Q: TraceQueries + 'static,
{
    let job_id = parse_job_id(&job_id, job_not_found)?;
    let job = state.queries.get_job(&job_id).await?;
    Ok(Json(job))
}

/// Get a job's trajectory, each step tagged with its tool category.
///
/// # Errors
///
/// Returns 404 if neither a trajectory nor a job exists for the id.
pub async fn get_trajectories<Q>(
    State(state): State<Arc<GatewayState<Q>>>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    Q: TraceQueries + 'static,
{
    let job_id = parse_job_id(&job_id, trajectory_not_found)?;
    let steps = state.queries.get_categorized_trajectory(&job_id).await?;

    tracing::debug!(job_id = %job_id.short(8), steps = steps.len(), "Serving trajectory");

    Ok(Json(steps))
}

/// Get computed summary statistics for a job.
///
/// # Errors
///
/// Returns 404 if neither a trajectory nor a job exists for the id.
pub async fn get_summary<Q>(
    State(state): State<Arc<GatewayState<Q>>>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    Q: TraceQueries + 'static,
{
    let job_id = parse_job_id(&job_id, job_not_found)?;
    let summary = state.queries.get_summary(&job_id).await?;
    Ok(Json(summary))
}

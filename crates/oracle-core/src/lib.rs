//! Core types and utilities for the oracle trace API.
//!
//! This crate provides the foundational types shared by the store, query and
//! gateway crates:
//!
//! - **Identifiers**: the opaque [`JobId`]
//! - **Traces**: [`Job`] records and their [`TrajectoryStep`]s
//! - **HITL events**: [`SentimentEvent`]s and per-label [`SentimentCount`]s
//! - **Tool categories**: the static function-name classifier
//! - **Summaries**: pure aggregation over a trajectory
//!
//! # Example
//!
//! ```
//! use oracle_core::{categories, summarize};
//!
//! assert_eq!(categories::classify("execute_bash"), "execution");
//! assert_eq!(categories::classify("no_such_tool"), "other");
//!
//! let summary = summarize(&[]);
//! assert_eq!(summary.total_steps, 0);
//! assert!(summary.success_rate.abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod categories;
pub mod error;
pub mod hitl;
pub mod ids;
pub mod job;
pub mod summary;
pub mod time;

pub use error::{CoreError, Result};
pub use hitl::{SentimentCount, SentimentEvent};
pub use ids::JobId;
pub use job::{Job, JobStatus, StepOutcome, TrajectoryStep};
pub use summary::{format_duration, summarize, OutcomeTally, TrajectorySummary};

//! Query layer for the oracle trace API.
//!
//! This crate answers every read the API serves. It sits between the HTTP
//! gateway and the storage layer, owning not-found semantics, event limits,
//! event merging and summary assembly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Gateway (HTTP)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        QueryService                          │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │    Job /    │ │ Trajectory  │ │    HITL Event       │   │
//! │  │ Trajectory  │ │  Summary    │ │    Merge + Limit    │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌─────────────┐
//!                       │    Store    │
//!                       │ (in-memory) │
//!                       └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use oracle_query::{QueryService, TraceQueries};
//! use oracle_store::MemoryStore;
//! use oracle_core::JobId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::sample()?);
//! let queries = QueryService::with_defaults(store);
//!
//! let summary = queries.get_summary(&JobId::new("demo-job-123")?).await?;
//! println!("{}% of steps succeeded", summary.summary.success_rate);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod events;
pub mod service;
pub mod types;

pub use error::{QueryError, Result};
pub use service::{QueryService, TraceQueries};
pub use types::{CategorizedStep, JobSummary, QueryConfig};

// Re-export commonly used types from dependencies for convenience
pub use oracle_core::{Job, JobId, SentimentCount, SentimentEvent, TrajectoryStep};

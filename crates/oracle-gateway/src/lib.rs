//! HTTP gateway for the oracle trace API.
//!
//! This crate exposes the read-only API over jobs, trajectories, trajectory
//! summaries, tool categories and HITL sentiment events. It handles:
//!
//! - Routing and JSON responses
//! - Mapping query errors onto HTTP status codes
//! - CORS, request tracing and request timeouts
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Clients (dashboard, curl)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       oracle-gateway                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │   Router    │ │  Handlers   │ │   Error Mapping     │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                      ┌──────────────┐
//!                      │ QueryService │
//!                      └──────────────┘
//!                              │
//!                              ▼
//!                      ┌──────────────┐
//!                      │ MemoryStore  │
//!                      └──────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use oracle_gateway::{GatewayConfig, GatewayState, create_router};
//! use oracle_query::QueryService;
//! use oracle_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::sample()?);
//! let queries = Arc::new(QueryService::with_defaults(store));
//!
//! let state = GatewayState::new(queries, GatewayConfig::default());
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigError, GatewayConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::GatewayState;

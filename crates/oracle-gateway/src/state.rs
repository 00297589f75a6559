//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use oracle_query::TraceQueries;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// This struct holds references to all services needed by the HTTP handlers.
pub struct GatewayState<Q>
where
    Q: TraceQueries,
{
    /// The query service answering trace and event lookups.
    pub queries: Arc<Q>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<Q> GatewayState<Q>
where
    Q: TraceQueries,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(queries: Arc<Q>, config: GatewayConfig) -> Self {
        Self { queries, config }
    }
}

impl<Q> Clone for GatewayState<Q>
where
    Q: TraceQueries,
{
    fn clone(&self) -> Self {
        Self {
            queries: Arc::clone(&self.queries),
            config: self.config.clone(),
        }
    }
}

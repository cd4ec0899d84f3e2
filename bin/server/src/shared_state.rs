use std::sync::Arc;

use traced_graphql_config::ServiceConfig;
use traced_graphql_internal::telemetry::TelemetryContext;

use crate::{pipeline::endpoint::GraphqlEndpoint, service::instrumenting::ServiceMetrics};

/// Immutable state shared by all workers of both listeners.
pub struct SharedState {
    pub config: Arc<ServiceConfig>,
    pub endpoint: GraphqlEndpoint,
    pub telemetry_context: TelemetryContext,
    pub metrics: Arc<ServiceMetrics>,
}

use traced_graphql_config::ServiceConfigError;

use crate::{schema::resolver::ResolverInitError, telemetry::TelemetryInitError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceInitError {
    #[error(transparent)]
    ServiceConfigError(#[from] ServiceConfigError),
    #[error(transparent)]
    TelemetryInitError(#[from] TelemetryInitError),
    #[error(transparent)]
    ResolverInitError(#[from] ResolverInitError),
    #[error("Failed to register metrics: {0}")]
    MetricsRegistryError(#[from] prometheus::Error),
    #[error("Failed to bind {0} HTTP server to address: {1}. Error: {2}")]
    HttpServerBindError(&'static str, String, std::io::Error),
}

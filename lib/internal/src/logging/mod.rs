pub mod logger_span;
pub mod request_id;
pub mod stderr;
pub mod utils;

pub use tracing_appender::non_blocking::WorkerGuard;
use traced_graphql_config::log::LoggingConfig;

use crate::logging::{stderr::build_stderr_layer, utils::DynLayer};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{0}': {1}")]
    InvalidFilter(String, tracing_subscriber::filter::ParseError),
}

/// Builds the layer writing service logs. The returned guard flushes buffered
/// records when dropped and must be kept alive for the lifetime of the process.
pub fn logging_layer_from_config<S>(
    config: &LoggingConfig,
) -> Result<(DynLayer<S>, WorkerGuard), LoggingError>
where
    S: tracing::Subscriber
        + for<'span> tracing_subscriber::registry::LookupSpan<'span>
        + Send
        + Sync,
{
    build_stderr_layer(config)
}

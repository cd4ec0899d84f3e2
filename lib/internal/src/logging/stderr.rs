use std::io::IsTerminal;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::time::UtcTime, Layer};
use traced_graphql_config::log::{LogFormat, LoggingConfig};

use crate::logging::{
    utils::{create_env_filter, DynLayer},
    LoggingError,
};

pub fn build_stderr_layer<S>(
    config: &LoggingConfig,
) -> Result<(DynLayer<S>, WorkerGuard), LoggingError>
where
    S: tracing::Subscriber
        + for<'span> tracing_subscriber::registry::LookupSpan<'span>
        + Send
        + Sync,
{
    let directives = config.env_filter_str();
    let filter = create_env_filter(directives, config.log_internals)
        .map_err(|e| LoggingError::InvalidFilter(directives.to_string(), e))?;

    let stderr_stream = std::io::stderr();
    let is_terminal = stderr_stream.is_terminal();
    let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(stderr_stream);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(stderr_writer);
    let timer = UtcTime::rfc_3339();

    let layer = match config.format {
        LogFormat::Json => stderr_layer
            .json()
            .with_timer(timer)
            .with_thread_ids(false)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .flatten_event(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Text => stderr_layer
            .compact()
            .with_thread_ids(false)
            .with_timer(timer)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(is_terminal)
            .with_filter(filter)
            .boxed(),
    };

    Ok((layer, stderr_guard))
}

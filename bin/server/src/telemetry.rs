use tracing_subscriber::{
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    Registry,
};
use traced_graphql_config::ServiceConfig;
use traced_graphql_internal::{
    logging::{logging_layer_from_config, utils::DynLayer, LoggingError, WorkerGuard},
    telemetry::{
        build_otel_layer_from_config, error::TelemetryError, RandomIdGenerator, SdkTracerProvider,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryInitError {
    #[error("Failed to set up logging: {0}")]
    Logging(#[from] LoggingError),
    #[error("Failed to set up tracing: {0}")]
    Tracing(#[from] TelemetryError),
    #[error("Failed to install the global subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the exporters and the log writer alive until the process ends.
pub(crate) struct TelemetryProviders {
    tracer: Option<SdkTracerProvider>,
    _log_guard: WorkerGuard,
}

impl TelemetryProviders {
    /// Flushes pending spans. Must run before the log guard is dropped.
    pub(crate) async fn graceful_shutdown(self) {
        if let Some(provider) = self.tracer {
            let _ = tokio::task::spawn_blocking(move || provider.shutdown()).await;
        }
    }
}

pub(crate) fn init(config: &ServiceConfig) -> Result<TelemetryProviders, TelemetryInitError> {
    let (log_layer, log_guard) = logging_layer_from_config::<Registry>(&config.log)?;

    let registry = tracing_subscriber::registry().with(log_layer);

    let otel = build_otel_layer_from_config::<Layered<DynLayer<Registry>, Registry>, _>(
        &config.telemetry,
        RandomIdGenerator::default(),
    )?;

    let tracer = match otel {
        Some((layer, provider)) => {
            registry.with(layer).try_init()?;
            Some(provider)
        }
        None => {
            registry.try_init()?;
            None
        }
    };

    Ok(TelemetryProviders {
        tracer,
        _log_guard: log_guard,
    })
}

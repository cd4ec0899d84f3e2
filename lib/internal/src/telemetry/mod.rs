//! This module owns the tracing setup API (`build_otel_layer_from_config`) and
//! a lightweight `TelemetryContext` for explicit trace propagation over HTTP headers
//! without relying on the global OpenTelemetry propagator.
use std::sync::Arc;

use opentelemetry::propagation::{Extractor, TextMapCompositePropagator, TextMapPropagator};
use opentelemetry::trace::TracerProvider;
use opentelemetry::{Context, InstrumentationScope, KeyValue};
use opentelemetry_http::HeaderInjector;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::{trace::IdGenerator, Resource};
use opentelemetry_zipkin::Propagator as B3Propagator;
use tracing::level_filters::LevelFilter;
use tracing::{Span, Subscriber};
use tracing_opentelemetry::OpenTelemetrySpanExt;
use tracing_subscriber::filter::{filter_fn, Targets};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;
use traced_graphql_config::telemetry::{TelemetryConfig, TracingPropagationConfig};

use crate::logging::logger_span::SERVICE_INTERNAL_LOGGER_TARGET;
use crate::telemetry::error::TelemetryError;
use crate::telemetry::traces::build_trace_provider;

pub mod error;
pub mod traces;

pub use opentelemetry_sdk::trace::{RandomIdGenerator, SdkTracerProvider};
pub use traces::spans;

/// Context for trace propagation that doesn't rely on global state.
#[derive(Clone, Debug, Default)]
pub struct TelemetryContext {
    propagator: Option<Arc<TextMapCompositePropagator>>,
}

impl TelemetryContext {
    /// Creates a telemetry context from tracing propagation config
    pub fn from_propagation_config(config: &TracingPropagationConfig) -> Self {
        let mut propagators: Vec<Box<dyn TextMapPropagator + Send + Sync>> = Vec::new();

        if config.trace_context {
            propagators.push(Box::new(TraceContextPropagator::new()));
        }

        if config.b3 {
            propagators.push(Box::new(B3Propagator::new()));
        }

        if propagators.is_empty() {
            return Self { propagator: None };
        }

        Self {
            propagator: Some(Arc::new(TextMapCompositePropagator::new(propagators))),
        }
    }

    /// Writes the trace context of `span` into outbound request headers.
    pub fn inject_context(&self, span: &Span, headers: &mut http::HeaderMap) {
        if let Some(propagator) = &self.propagator {
            let context = span.context();
            propagator.inject_context(&context, &mut HeaderInjector(headers));
        }
    }

    /// Reads a remote trace context from inbound request headers.
    pub fn extract_context(&self, headers: &ntex::http::HeaderMap) -> Context {
        match &self.propagator {
            Some(propagator) => propagator.extract(&HeaderExtractor(headers)),
            None => Context::new(),
        }
    }
}

pub struct HeaderExtractor<'a>(pub &'a ntex::http::HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(|value| value.as_str())
            .collect::<Vec<_>>()
    }
}

pub fn build_otel_layer_from_config<S, I>(
    config: &TelemetryConfig,
    id_generator: I,
) -> Result<Option<(impl Layer<S> + Send + Sync + 'static, SdkTracerProvider)>, TelemetryError>
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync + 'static,
    I: IdGenerator + 'static,
{
    if !config.is_tracing_enabled() {
        return Ok(None);
    }

    let resource = Resource::builder()
        .with_attributes([KeyValue::new("service.name", config.service.name.clone())])
        .build();

    let traces_provider = build_trace_provider(config, id_generator, resource)?;

    let scope = InstrumentationScope::builder("traced-graphql")
        .with_version(env!("CARGO_PKG_VERSION"))
        .build();

    let tracer = traces_provider.tracer_with_scope(scope);
    let target_filter = Targets::new()
        .with_target(SERVICE_INTERNAL_LOGGER_TARGET, LevelFilter::OFF)
        .with_default(LevelFilter::INFO);

    let traces_layer = tracing_opentelemetry::layer()
        .with_tracer(tracer)
        .with_tracked_inactivity(false)
        .with_location(false)
        .with_threads(false)
        .with_filter(target_filter)
        // Log events (info!, warn!, ...) are not span events.
        .with_filter(filter_fn(|metadata| metadata.is_span()));

    Ok(Some((traces_layer, traces_provider)))
}

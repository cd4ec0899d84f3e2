use opentelemetry_sdk::{
    runtime,
    trace::{
        span_processor_with_async_runtime::BatchSpanProcessor, IdGenerator, Sampler,
        SdkTracerProvider, TracerProviderBuilder,
    },
    Resource,
};
use opentelemetry_zipkin::ZipkinExporter;
use traced_graphql_config::telemetry::TelemetryConfig;

use crate::telemetry::error::TelemetryError;

pub mod spans;

pub(super) fn build_trace_provider<I>(
    config: &TelemetryConfig,
    id_generator: I,
    resource: Resource,
) -> Result<SdkTracerProvider, TelemetryError>
where
    I: IdGenerator + 'static,
{
    let sampling = config.tracing.sampling;
    if !(0.0..=1.0).contains(&sampling) {
        return Err(TelemetryError::InvalidSampling(sampling));
    }

    // Remote parents decide for the whole trace, local roots are sampled by ratio.
    let sampler = Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(sampling)));

    let builder = TracerProviderBuilder::default()
        .with_id_generator(id_generator)
        .with_sampler(sampler)
        .with_resource(resource);

    Ok(setup_zipkin_exporter(config, builder)?.build())
}

fn setup_zipkin_exporter(
    config: &TelemetryConfig,
    builder: TracerProviderBuilder,
) -> Result<TracerProviderBuilder, TelemetryError> {
    let exporter = ZipkinExporter::builder()
        .with_collector_endpoint(config.tracing.zipkin.endpoint.as_str())
        .build()
        .map_err(|e| TelemetryError::SpanExporterSetup(e.to_string()))?;

    // The exporter's HTTP client needs a Tokio reactor, the batch processor owns one.
    let span_processor = BatchSpanProcessor::builder(exporter, runtime::TokioCurrentThread).build();

    Ok(builder.with_span_processor(span_processor))
}

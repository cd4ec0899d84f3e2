use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub service: ServiceIdentityConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
}

impl TelemetryConfig {
    pub fn is_tracing_enabled(&self) -> bool {
        self.tracing.enabled
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServiceIdentityConfig {
    /// Reported as the `service.name` resource attribute of every exported span.
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceIdentityConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

fn default_service_name() -> String {
    "traced-graphql".to_string()
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct TracingConfig {
    /// Whether spans are exported to the Zipkin collector.
    ///
    /// Can also be set via the `TRACING_ENABLED` environment variable.
    #[serde(default = "default_tracing_enabled")]
    pub enabled: bool,
    /// Ratio of traces to sample, between `0.0` and `1.0`.
    #[serde(default = "default_sampling")]
    pub sampling: f64,
    #[serde(default)]
    pub zipkin: ZipkinExporterConfig,
    #[serde(default)]
    pub propagation: TracingPropagationConfig,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: default_tracing_enabled(),
            sampling: default_sampling(),
            zipkin: ZipkinExporterConfig::default(),
            propagation: TracingPropagationConfig::default(),
        }
    }
}

fn default_tracing_enabled() -> bool {
    true
}

fn default_sampling() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct ZipkinExporterConfig {
    /// The Zipkin collector endpoint accepting spans over HTTP.
    ///
    /// Can also be set via the `ZIPKIN_ENDPOINT` environment variable.
    #[serde(default = "default_zipkin_endpoint")]
    pub endpoint: Url,
}

impl Default for ZipkinExporterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_zipkin_endpoint(),
        }
    }
}

fn default_zipkin_endpoint() -> Url {
    Url::parse("http://localhost:9411/api/v2/spans").expect("default zipkin endpoint is valid")
}

/// Controls which headers carry the trace context on outbound calls and which are
/// read from inbound requests.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct TracingPropagationConfig {
    /// W3C `traceparent` / `tracestate` headers.
    #[serde(default = "default_propagation_trace_context")]
    pub trace_context: bool,
    /// Zipkin B3 headers.
    #[serde(default = "default_propagation_b3")]
    pub b3: bool,
}

impl Default for TracingPropagationConfig {
    fn default() -> Self {
        Self {
            trace_context: default_propagation_trace_context(),
            b3: default_propagation_b3(),
        }
    }
}

fn default_propagation_trace_context() -> bool {
    true
}

fn default_propagation_b3() -> bool {
    true
}

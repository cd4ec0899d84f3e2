#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("sampling ratio must be between 0.0 and 1.0, got {0}")]
    InvalidSampling(f64),
    #[error("unable to configure span exporter: {0}")]
    SpanExporterSetup(String),
}

use std::fmt::Display;

use opentelemetry::Context;
use tracing::{field::Empty, info_span, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::telemetry::traces::spans::{attributes, kind::SpanKind, TARGET_NAME};

/// Server span around a single endpoint invocation.
pub struct EndpointSpan {
    pub span: Span,
}

impl std::ops::Deref for EndpointSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl EndpointSpan {
    pub fn new(operation: &str, request_id: &str) -> Self {
        let kind: &'static str = SpanKind::GraphqlEndpoint.into();

        let span = info_span!(
            target: TARGET_NAME,
            "endpoint",
            "otel.name" = operation,
            "otel.kind" = "Server",
            "otel.status_code" = Empty,
            "component" = kind,
            "request.id" = request_id,
            "error.type" = Empty,
            "error.message" = Empty,
        );

        EndpointSpan { span }
    }

    /// Attaches the trace context extracted from the inbound request.
    /// An invalid (empty) context leaves the span as a local root.
    pub fn set_remote_parent(&self, parent: Context) {
        use opentelemetry::trace::TraceContextExt;

        if parent.span().span_context().is_valid() {
            let _ = self.span.set_parent(parent);
        }
    }

    pub fn record_ok(&self) {
        self.record(attributes::OTEL_STATUS_CODE, "Ok");
    }

    pub fn record_error(&self, error_type: &str, error: &impl Display) {
        self.record(attributes::OTEL_STATUS_CODE, "Error");
        self.record(attributes::ERROR_TYPE, error_type);
        self.record(attributes::ERROR_MESSAGE, error.to_string().as_str());
    }
}

use std::fmt::Display;

use tracing::{field::Empty, info_span, Span};
use url::Url;

use crate::telemetry::traces::spans::{attributes, kind::SpanKind, TARGET_NAME};

/// Client span around the outbound call made by a field resolver.
/// Created as a child of the current span, so it must be built inside the request span.
pub struct ResolverSpan {
    pub span: Span,
}

impl std::ops::Deref for ResolverSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl ResolverSpan {
    pub fn new(field: &str, url: &Url) -> Self {
        let kind: &'static str = SpanKind::GraphqlResolver.into();

        let span = info_span!(
            target: TARGET_NAME,
            "resolver",
            "otel.name" = field,
            "otel.kind" = "Client",
            "otel.status_code" = Empty,
            "component" = kind,
            "graphql.field.name" = field,
            "http.request.method" = "GET",
            "url.full" = url.as_str(),
            "server.address" = url.host_str(),
            "server.port" = url.port_or_known_default(),
            "http.response.status_code" = Empty,
            "error.type" = Empty,
            "error.message" = Empty,
        );

        ResolverSpan { span }
    }

    /// The status is recorded for visibility only, any response counts as success.
    pub fn record_response(&self, status: u16) {
        self.record(attributes::HTTP_RESPONSE_STATUS_CODE, status);
        self.record(attributes::OTEL_STATUS_CODE, "Ok");
    }

    pub fn record_error(&self, error: &impl Display) {
        self.record(attributes::OTEL_STATUS_CODE, "Error");
        self.record(attributes::ERROR_TYPE, "transport");
        self.record(attributes::ERROR_MESSAGE, error.to_string().as_str());
    }
}

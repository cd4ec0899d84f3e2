use tracing::{info_span, Span};

use crate::logging::request_id::RequestIdentifier;

/// Target of the per-request logging span. Spans with this target only decorate
/// log records and are never exported as traces.
pub static SERVICE_INTERNAL_LOGGER_TARGET: &str = "traced-graphql-logger";

#[derive(Debug, Clone)]
pub struct LoggerRootSpan {
    pub span: Span,
}

impl std::ops::Deref for LoggerRootSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl LoggerRootSpan {
    pub fn create(request_id: &RequestIdentifier<'_>) -> Self {
        let span = info_span!(target: SERVICE_INTERNAL_LOGGER_TARGET, "request",
          req_id = %request_id,
        );

        Self { span }
    }
}

use opentelemetry::Context;

/// Per-request values passed down the endpoint chain and into execution.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    /// Trace context extracted from the inbound headers. Empty when none was sent.
    pub remote_parent: Context,
}

impl RequestContext {
    pub fn new(request_id: String, remote_parent: Context) -> Self {
        Self {
            request_id,
            remote_parent,
        }
    }

    /// A context without a remote parent.
    pub fn detached(request_id: impl Into<String>) -> Self {
        Self::new(request_id.into(), Context::new())
    }
}

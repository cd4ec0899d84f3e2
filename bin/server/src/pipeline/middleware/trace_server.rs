use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use tracing::Instrument;
use traced_graphql_internal::telemetry::spans::endpoint::EndpointSpan;

use crate::pipeline::{
    context::RequestContext,
    endpoint::{BoxEndpoint, Endpoint, Middleware},
    error::PipelineError,
};

/// Runs the wrapped endpoint inside a server span named after the operation.
pub struct TraceServer {
    operation: &'static str,
}

impl TraceServer {
    pub fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl<Req, Res> Middleware<Req, Res> for TraceServer
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    fn wrap(&self, next: BoxEndpoint<Req, Res>) -> BoxEndpoint<Req, Res> {
        Arc::new(TracedEndpoint {
            operation: self.operation,
            next,
            _marker: PhantomData,
        })
    }
}

struct TracedEndpoint<Req, Res> {
    operation: &'static str,
    next: BoxEndpoint<Req, Res>,
    _marker: PhantomData<fn(Req) -> Res>,
}

#[async_trait]
impl<Req, Res> Endpoint<Req, Res> for TracedEndpoint<Req, Res>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    async fn call(&self, ctx: &RequestContext, request: Req) -> Result<Res, PipelineError> {
        let span = EndpointSpan::new(self.operation, &ctx.request_id);
        span.set_remote_parent(ctx.remote_parent.clone());

        let result = self
            .next
            .call(ctx, request)
            .instrument(span.span.clone())
            .await;

        match &result {
            Ok(_) => span.record_ok(),
            Err(err) => span.record_error(err.error_type(), err),
        }

        result
    }
}

use std::{marker::PhantomData, sync::Arc, time::Instant};

use async_trait::async_trait;
use tracing::{error, info};

use crate::pipeline::{
    context::RequestContext,
    endpoint::{BoxEndpoint, Endpoint, Middleware},
    error::PipelineError,
};

/// Logs the outcome and duration of every call of the wrapped endpoint.
pub struct LoggingMiddleware {
    method: &'static str,
}

impl LoggingMiddleware {
    pub fn new(method: &'static str) -> Self {
        Self { method }
    }
}

impl<Req, Res> Middleware<Req, Res> for LoggingMiddleware
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    fn wrap(&self, next: BoxEndpoint<Req, Res>) -> BoxEndpoint<Req, Res> {
        Arc::new(LoggedEndpoint {
            method: self.method,
            next,
            _marker: PhantomData,
        })
    }
}

struct LoggedEndpoint<Req, Res> {
    method: &'static str,
    next: BoxEndpoint<Req, Res>,
    _marker: PhantomData<fn(Req) -> Res>,
}

#[async_trait]
impl<Req, Res> Endpoint<Req, Res> for LoggedEndpoint<Req, Res>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    async fn call(&self, ctx: &RequestContext, request: Req) -> Result<Res, PipelineError> {
        let started = Instant::now();
        let result = self.next.call(ctx, request).await;
        let took = started.elapsed();

        match &result {
            Ok(_) => info!(method = self.method, ?took, error = "nil"),
            Err(err) => error!(method = self.method, ?took, error = %err),
        }

        result
    }
}

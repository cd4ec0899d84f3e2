//! Uniform call contract around the service.
//!
//! An [`Endpoint`] turns a decoded request into a response or a [`PipelineError`].
//! A [`Middleware`] wraps one endpoint into another with the same signature, so
//! cross-cutting concerns are stacked with [`compose`] when the app is configured.
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    pipeline::{context::RequestContext, decode::GraphqlRequest, error::PipelineError},
    service::{GraphQLService, QueryResult},
};

#[async_trait]
pub trait Endpoint<Req, Res>: Send + Sync
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    async fn call(&self, ctx: &RequestContext, request: Req) -> Result<Res, PipelineError>;
}

pub type BoxEndpoint<Req, Res> = Arc<dyn Endpoint<Req, Res>>;

pub type GraphqlEndpoint = BoxEndpoint<GraphqlRequest, QueryResult>;

pub trait Middleware<Req, Res>: Send + Sync
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    fn wrap(&self, next: BoxEndpoint<Req, Res>) -> BoxEndpoint<Req, Res>;
}

/// Applies `middlewares` in order: the first one wraps `core`, the last one is outermost.
pub fn compose<Req, Res>(
    core: BoxEndpoint<Req, Res>,
    middlewares: &[&dyn Middleware<Req, Res>],
) -> BoxEndpoint<Req, Res>
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    middlewares
        .iter()
        .fold(core, |endpoint, middleware| middleware.wrap(endpoint))
}

/// Innermost endpoint, delegating to the service. Service failures are part of
/// the result, so this endpoint never fails.
pub struct ServiceEndpoint {
    service: Arc<dyn GraphQLService>,
}

impl ServiceEndpoint {
    pub fn new(service: Arc<dyn GraphQLService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint<GraphqlRequest, QueryResult> for ServiceEndpoint {
    async fn call(
        &self,
        ctx: &RequestContext,
        request: GraphqlRequest,
    ) -> Result<QueryResult, PipelineError> {
        Ok(self.service.execute(ctx, &request.query).await)
    }
}

use std::{sync::Arc, time::Instant};

use async_trait::async_trait;
use tracing::info;

use crate::{
    pipeline::context::RequestContext,
    service::{GraphQLService, QueryResult},
};

/// Error derived from a result carrying GraphQL errors.
#[derive(Debug, thiserror::Error)]
#[error("request error: [{}]", .0.join(", "))]
pub struct RequestError(pub Vec<String>);

impl RequestError {
    pub fn from_result(result: &QueryResult) -> Option<Self> {
        if !result.has_errors() {
            return None;
        }

        Some(RequestError(
            result.errors.iter().map(|e| e.message.clone()).collect(),
        ))
    }
}

pub struct LoggingService {
    inner: Arc<dyn GraphQLService>,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn GraphQLService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl GraphQLService for LoggingService {
    async fn execute(&self, ctx: &RequestContext, query: &str) -> QueryResult {
        let started = Instant::now();
        let result = self.inner.execute(ctx, query).await;
        let took = started.elapsed();

        // A null `data` with no errors is still a success.
        match RequestError::from_result(&result) {
            Some(err) => info!(method = "do", query, ?took, error = %err),
            None => info!(method = "do", query, ?took, error = "nil"),
        }

        result
    }
}

//! The GraphQL service and its decorators.
//!
//! Every layer implements [`GraphQLService`] and owns the layer it wraps, so the
//! chain is assembled once at startup: executor, then logging, then instrumentation.
pub mod executor;
pub mod instrumenting;
pub mod logging;

use async_graphql::{ServerError, Value};
use async_trait::async_trait;
use serde::{Serialize, Serializer};

use crate::pipeline::context::RequestContext;

#[async_trait]
pub trait GraphQLService: Send + Sync {
    /// Executes `query`. Failures are carried in [`QueryResult::errors`].
    async fn execute(&self, ctx: &RequestContext, query: &str) -> QueryResult;
}

#[derive(Debug, Serialize)]
pub struct QueryResult {
    pub data: Value,
    #[serde(serialize_with = "serialize_errors")]
    pub errors: Vec<ServerError>,
}

impl QueryResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl From<async_graphql::Response> for QueryResult {
    fn from(response: async_graphql::Response) -> Self {
        QueryResult {
            data: response.data,
            errors: response.errors,
        }
    }
}

// An empty list is written as `null`.
fn serialize_errors<S>(errors: &[ServerError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if errors.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.collect_seq(errors)
    }
}

use async_trait::async_trait;

use crate::{
    pipeline::context::RequestContext,
    schema::ServiceSchema,
    service::{GraphQLService, QueryResult},
};

/// Executes queries against the schema. Holds no per-request state.
pub struct SchemaService {
    schema: ServiceSchema,
}

impl SchemaService {
    pub fn new(schema: ServiceSchema) -> Self {
        Self { schema }
    }
}

#[async_trait]
impl GraphQLService for SchemaService {
    async fn execute(&self, ctx: &RequestContext, query: &str) -> QueryResult {
        let request = async_graphql::Request::new(query).data(ctx.clone());

        self.schema.execute(request).await.into()
    }
}

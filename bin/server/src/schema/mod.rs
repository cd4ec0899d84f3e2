pub mod resolver;

use async_graphql::{
    ComplexObject, Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject,
};

use crate::schema::resolver::{FieldResolvers, ResolverError};

pub type ServiceSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the static schema. The resolvers are shared by all executions.
pub fn build_schema(resolvers: FieldResolvers) -> ServiceSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(resolvers)
        .finish()
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    id: Option<String>,
}

#[ComplexObject]
impl User {
    async fn name(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<String>> {
        let Some(source) = self.id.as_deref() else {
            return Ok(None);
        };

        let resolvers = ctx.data::<FieldResolvers>()?;
        Ok(null_on_error(ctx, resolvers.user_name(source).await))
    }
}

pub struct Query;

#[Object]
impl Query {
    /// Search something
    async fn user(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> async_graphql::Result<Option<User>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let resolvers = ctx.data::<FieldResolvers>()?;
        let resolved = null_on_error(ctx, resolvers.user(&id).await);

        Ok(resolved.map(|id| User { id: Some(id) }))
    }
}

/// Records a resolver failure as a field error at the current path, leaving the field null.
fn null_on_error(ctx: &Context<'_>, result: Result<String, ResolverError>) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let error = async_graphql::Error::new(err.to_string()).into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(error));
            None
        }
    }
}

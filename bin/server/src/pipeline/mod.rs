pub mod context;
pub mod decode;
pub mod encode;
pub mod endpoint;
pub mod error;
pub mod middleware;

use ntex::web::{self, HttpRequest};
use tracing::{error, Instrument};
use traced_graphql_internal::logging::{
    logger_span::LoggerRootSpan, request_id::obtain_req_correlation_id,
};

use crate::{
    pipeline::{
        context::RequestContext, decode::decode_graphql_request, encode::encode_response,
        error::PipelineError,
    },
    shared_state::SharedState,
};

pub async fn graphql_request_handler(
    req: &HttpRequest,
    shared_state: &SharedState,
) -> web::HttpResponse {
    let request_id = obtain_req_correlation_id(req);
    let root_span = LoggerRootSpan::create(&request_id);

    async {
        let ctx = RequestContext::new(
            request_id.to_string(),
            shared_state.telemetry_context.extract_context(req.headers()),
        );

        match execute_pipeline(req, &ctx, shared_state).await {
            Ok(response) => response,
            Err(err) => {
                error!(component = "http", error = %err, "failed to handle request");
                err.into_response()
            }
        }
    }
    .instrument(root_span.span.clone())
    .await
}

async fn execute_pipeline(
    req: &HttpRequest,
    ctx: &RequestContext,
    shared_state: &SharedState,
) -> Result<web::HttpResponse, PipelineError> {
    let request = decode_graphql_request(req)?;
    let result = shared_state.endpoint.call(ctx, request).await?;

    encode_response(&result)
}

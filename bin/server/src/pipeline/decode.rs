use ntex::web::HttpRequest;

use crate::pipeline::error::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlRequest {
    pub query: String,
}

/// Reads the first `query` parameter of the URL query string.
pub fn decode_graphql_request(req: &HttpRequest) -> Result<GraphqlRequest, PipelineError> {
    let query = url::form_urlencoded::parse(req.query_string().as_bytes())
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.into_owned())
        .ok_or(PipelineError::MissingQueryParam)?;

    if query.is_empty() {
        return Err(PipelineError::EmptyQueryParam);
    }

    Ok(GraphqlRequest { query })
}

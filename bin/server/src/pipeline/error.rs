use http::header::CONTENT_TYPE;
use ntex::web;
use serde_json::json;

use crate::pipeline::encode::JSON_CONTENT_TYPE;

#[derive(Debug, thiserror::Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PipelineError {
    #[error("bad request")]
    MissingQueryParam,
    #[error("bad request")]
    EmptyQueryParam,
    #[error("failed to serialize response: {0}")]
    ResponseSerialization(serde_json::Error),
}

impl PipelineError {
    pub fn error_type(&self) -> &'static str {
        self.into()
    }

    /// Every pipeline error is written as a 500 with a JSON `error` message.
    pub fn into_response(&self) -> web::HttpResponse {
        let body = json!({ "error": self.to_string() }).to_string();

        web::HttpResponse::InternalServerError()
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
    }
}

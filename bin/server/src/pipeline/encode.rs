use http::header::CONTENT_TYPE;
use ntex::{util::Bytes, web};

use crate::{pipeline::error::PipelineError, service::QueryResult};

pub static JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub fn encode_response(result: &QueryResult) -> Result<web::HttpResponse, PipelineError> {
    let body = serde_json::to_vec(result).map_err(PipelineError::ResponseSerialization)?;

    Ok(web::HttpResponse::Ok()
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(Bytes::from(body)))
}

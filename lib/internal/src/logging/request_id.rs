use std::fmt::Display;

use ntex::web::HttpRequest;
use ulid::Ulid;

pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Uses the caller-provided `x-request-id` when present, otherwise generates one.
pub fn obtain_req_correlation_id(request: &HttpRequest) -> RequestIdentifier<'_> {
    if let Some(req_id_header) = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        return RequestIdentifier::FromRequest(req_id_header);
    }

    RequestIdentifier::Generated(Ulid::new())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestIdentifier<'a> {
    FromRequest(&'a str),
    Generated(Ulid),
}

impl Display for RequestIdentifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestIdentifier::FromRequest(id) => write!(f, "{}", id),
            RequestIdentifier::Generated(id) => write!(f, "{}", id),
        }
    }
}

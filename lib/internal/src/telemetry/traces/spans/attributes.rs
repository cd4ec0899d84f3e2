/// OpenTelemetry standard attributes
pub const OTEL_NAME: &str = "otel.name";
pub const OTEL_STATUS_CODE: &str = "otel.status_code";
pub const OTEL_KIND: &str = "otel.kind";

/// OpenTelemetry standard attributes for errors
pub const ERROR_TYPE: &str = "error.type";
pub const ERROR_MESSAGE: &str = "error.message";

/// HTTP attributes (OpenTelemetry Semantic Conventions)
pub const SERVER_ADDRESS: &str = "server.address";
pub const SERVER_PORT: &str = "server.port";
pub const URL_FULL: &str = "url.full";
pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";

/// GraphQL attributes
pub const GRAPHQL_FIELD_NAME: &str = "graphql.field.name";

/// Service attributes
pub const COMPONENT: &str = "component";
pub const REQUEST_ID: &str = "request.id";

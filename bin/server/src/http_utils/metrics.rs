use std::sync::Arc;

use http::{header::CONTENT_TYPE, StatusCode};
use ntex::{http::ResponseBuilder, web};
use tracing::error;

use crate::service::instrumenting::ServiceMetrics;

static PROMETHEUS_TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn metrics_handler(
    metrics: web::types::State<Arc<ServiceMetrics>>,
) -> web::HttpResponse {
    match metrics.render() {
        Ok(rendered) => ResponseBuilder::new(StatusCode::OK)
            .header(CONTENT_TYPE, PROMETHEUS_TEXT_CONTENT_TYPE)
            .body(rendered),
        Err(err) => {
            error!(component = "debug", error = %err, "failed to render metrics");
            web::HttpResponse::InternalServerError().finish()
        }
    }
}

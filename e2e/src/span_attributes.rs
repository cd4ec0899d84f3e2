#[cfg(test)]
mod span_attributes_e2e_tests {
    use tracing::{subscriber::with_default, Span};
    use tracing_subscriber::{layer::SubscriberExt, Registry};
    use traced_graphql_internal::telemetry::spans::{
        attributes, endpoint::EndpointSpan, resolver::ResolverSpan,
    };
    use url::Url;

    use crate::testkit::spans::{RecordedSpan, RecordingLayer};

    fn assert_fields(span: &Span, expected_fields: &[&str]) {
        let metadata = span.metadata().expect("Span should have metadata");

        for field in expected_fields {
            assert!(
                span.field(*field).is_some(),
                "Field '{}' is missing from span '{}'",
                field,
                metadata.name()
            );
        }

        let extra_fields = metadata
            .fields()
            .iter()
            .map(|field| field.name())
            .filter(|f| !expected_fields.contains(f))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(
            expected_fields.len(),
            metadata.fields().len(),
            "Found extra fields in the span: {}",
            extra_fields
        );
    }

    fn single_span(layer: &RecordingLayer, name: &str) -> RecordedSpan {
        let mut spans = layer.spans_named(name);
        assert_eq!(spans.len(), 1, "expected exactly one '{}' span", name);
        spans.remove(0)
    }

    #[test]
    fn endpoint_span_carries_server_attributes() {
        let layer = RecordingLayer::default();
        let subscriber = Registry::default().with(layer.clone());

        with_default(subscriber, || {
            let span = EndpointSpan::new("Graphql", "req-1");
            assert_fields(
                &span,
                &[
                    attributes::OTEL_NAME,
                    attributes::OTEL_KIND,
                    attributes::OTEL_STATUS_CODE,
                    attributes::COMPONENT,
                    attributes::REQUEST_ID,
                    attributes::ERROR_TYPE,
                    attributes::ERROR_MESSAGE,
                ],
            );

            span.record_error("bad_request", &"bad request");
        });

        let recorded = single_span(&layer, "endpoint");
        assert_eq!(recorded.field(attributes::OTEL_NAME), Some("Graphql"));
        assert_eq!(recorded.field(attributes::OTEL_KIND), Some("Server"));
        assert_eq!(recorded.field(attributes::COMPONENT), Some("graphql.endpoint"));
        assert_eq!(recorded.field(attributes::REQUEST_ID), Some("req-1"));
        assert_eq!(recorded.field(attributes::OTEL_STATUS_CODE), Some("Error"));
        assert_eq!(recorded.field(attributes::ERROR_TYPE), Some("bad_request"));
        assert_eq!(recorded.field(attributes::ERROR_MESSAGE), Some("bad request"));
    }

    #[test]
    fn resolver_span_carries_client_attributes() {
        let layer = RecordingLayer::default();
        let subscriber = Registry::default().with(layer.clone());
        let url = Url::parse("http://users.internal:8080/lookup").expect("valid url");

        with_default(subscriber, || {
            let span = ResolverSpan::new("userName", &url);
            assert_fields(
                &span,
                &[
                    attributes::OTEL_NAME,
                    attributes::OTEL_KIND,
                    attributes::OTEL_STATUS_CODE,
                    attributes::COMPONENT,
                    attributes::GRAPHQL_FIELD_NAME,
                    attributes::HTTP_REQUEST_METHOD,
                    attributes::URL_FULL,
                    attributes::SERVER_ADDRESS,
                    attributes::SERVER_PORT,
                    attributes::HTTP_RESPONSE_STATUS_CODE,
                    attributes::ERROR_TYPE,
                    attributes::ERROR_MESSAGE,
                ],
            );

            span.record_response(404);
        });

        let recorded = single_span(&layer, "resolver");
        assert_eq!(recorded.field(attributes::OTEL_NAME), Some("userName"));
        assert_eq!(recorded.field(attributes::OTEL_KIND), Some("Client"));
        assert_eq!(recorded.field(attributes::COMPONENT), Some("graphql.resolver"));
        assert_eq!(recorded.field(attributes::HTTP_REQUEST_METHOD), Some("GET"));
        assert_eq!(
            recorded.field(attributes::URL_FULL),
            Some("http://users.internal:8080/lookup")
        );
        assert_eq!(recorded.field(attributes::SERVER_ADDRESS), Some("users.internal"));
        assert_eq!(recorded.field(attributes::SERVER_PORT), Some("8080"));
        assert_eq!(recorded.field(attributes::HTTP_RESPONSE_STATUS_CODE), Some("404"));
        assert_eq!(recorded.field(attributes::OTEL_STATUS_CODE), Some("Ok"));
        assert_eq!(recorded.closed, 1);
    }

    #[test]
    fn resolver_span_is_child_of_endpoint_span() {
        let layer = RecordingLayer::default();
        let subscriber = Registry::default().with(layer.clone());
        let url = Url::parse("http://127.0.0.1:1/").expect("valid url");

        with_default(subscriber, || {
            let endpoint = EndpointSpan::new("Graphql", "req-2");
            let resolver = endpoint.in_scope(|| ResolverSpan::new("user", &url));

            resolver.record_error(&"connection refused");
        });

        let endpoint = single_span(&layer, "endpoint");
        let resolver = single_span(&layer, "resolver");
        assert_eq!(resolver.parent, Some(endpoint.index));
        assert_eq!(resolver.field(attributes::OTEL_STATUS_CODE), Some("Error"));
        assert_eq!(resolver.field(attributes::ERROR_TYPE), Some("transport"));
        assert_eq!(resolver.field(attributes::ERROR_MESSAGE), Some("connection refused"));
    }
}

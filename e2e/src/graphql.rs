#[cfg(test)]
mod graphql_e2e_tests {
    use ntex::web::test;
    use serde_json::Value;

    use crate::testkit::{init_graphql_request, init_service_from_config_inline, upstream_config};

    const CLOSED_UPSTREAM: &str = "http://127.0.0.1:1/";

    #[ntex::test]
    async fn should_resolve_user_with_derived_name() {
        let mut upstream = mockito::Server::new_async().await;
        let mock = upstream
            .mock("GET", "/")
            .with_status(200)
            .with_body("ignored")
            .expect(2)
            .create_async()
            .await;

        let app = init_service_from_config_inline(&upstream_config(&upstream.url(), &upstream.url()))
            .await
            .unwrap();

        let req = init_graphql_request(r#"{ user(id: "42") { id name } }"#);
        let resp = test::call_service(&app.app, req.to_request()).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json; charset=utf-8")
        );

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).expect("utf-8 body");
        insta::assert_snapshot!(body, @r#"{"data":{"user":{"id":"id:42","name":"name:id:42"}},"errors":null}"#);

        mock.assert_async().await;
    }

    #[ntex::test]
    async fn should_reject_missing_query() {
        let app = init_service_from_config_inline(&upstream_config(CLOSED_UPSTREAM, CLOSED_UPSTREAM))
            .await
            .unwrap();

        let req = test::TestRequest::get().uri("/graphql").to_request();
        let resp = test::call_service(&app.app, req).await;

        assert_eq!(resp.status(), 500);
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json; charset=utf-8")
        );
        let body = test::read_body(resp).await;
        assert_eq!(body, r#"{"error":"bad request"}"#.as_bytes());
    }

    #[ntex::test]
    async fn should_reject_empty_query() {
        let app = init_service_from_config_inline(&upstream_config(CLOSED_UPSTREAM, CLOSED_UPSTREAM))
            .await
            .unwrap();

        let req = test::TestRequest::get().uri("/graphql?query=").to_request();
        let resp = test::call_service(&app.app, req).await;

        assert_eq!(resp.status(), 500);
        let body = test::read_body(resp).await;
        assert_eq!(body, r#"{"error":"bad request"}"#.as_bytes());
    }

    #[ntex::test]
    async fn should_null_name_when_user_name_upstream_fails() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/")
            .with_status(200)
            .create_async()
            .await;

        let app = init_service_from_config_inline(&upstream_config(&upstream.url(), CLOSED_UPSTREAM))
            .await
            .unwrap();

        let req = init_graphql_request(r#"{ user(id: "42") { id name } }"#);
        let resp = test::call_service(&app.app, req.to_request()).await;

        assert_eq!(resp.status(), 200, "resolver errors are not transport errors");
        let body = test::read_body(resp).await;
        let json: Value = serde_json::from_slice(&body).expect("expected valid JSON response");

        // Compared as a whole so an omitted `name` key cannot pass as null.
        assert_eq!(
            json["data"],
            serde_json::json!({ "user": { "id": "id:42", "name": null } })
        );

        let errors = json["errors"].as_array().expect("expected an errors array");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["path"], serde_json::json!(["user", "name"]));
        assert!(errors[0]["message"]
            .as_str()
            .expect("error message")
            .starts_with("upstream request failed"));
    }

    #[ntex::test]
    async fn should_null_user_when_user_upstream_fails() {
        let app = init_service_from_config_inline(&upstream_config(CLOSED_UPSTREAM, CLOSED_UPSTREAM))
            .await
            .unwrap();

        let req = init_graphql_request(r#"{ user(id: "42") { id name } }"#);
        let resp = test::call_service(&app.app, req.to_request()).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let json: Value = serde_json::from_slice(&body).expect("expected valid JSON response");

        assert_eq!(json["data"], serde_json::json!({ "user": null }));

        let errors = json["errors"].as_array().expect("expected an errors array");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["path"], serde_json::json!(["user"]));
        assert!(errors[0]["message"]
            .as_str()
            .expect("error message")
            .starts_with("upstream request failed"));
    }

    #[ntex::test]
    async fn should_report_invalid_queries_in_the_body() {
        let app = init_service_from_config_inline(&upstream_config(CLOSED_UPSTREAM, CLOSED_UPSTREAM))
            .await
            .unwrap();

        let req = init_graphql_request("{ user(id: \"42\") { unknown } }");
        let resp = test::call_service(&app.app, req.to_request()).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let json: Value = serde_json::from_slice(&body).expect("expected valid JSON response");

        assert!(json["data"].is_null());
        assert_eq!(json["errors"].as_array().map(Vec::len), Some(1));
    }

    #[ntex::test]
    async fn should_respond_on_configured_route() {
        let app = init_service_from_config_inline(
            r#"
            telemetry:
              tracing:
                enabled: false
            http:
              graphql_endpoint: /query
            "#,
        )
        .await
        .unwrap();

        let req = test::TestRequest::get().uri("/query?query=").to_request();
        let resp = test::call_service(&app.app, req).await;
        assert_eq!(resp.status(), 500);

        let req = test::TestRequest::get().uri("/graphql?query=").to_request();
        let resp = test::call_service(&app.app, req).await;
        assert_eq!(resp.status(), 404);
    }
}

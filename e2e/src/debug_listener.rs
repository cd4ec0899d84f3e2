#[cfg(test)]
mod debug_listener_e2e_tests {
    use ntex::web::test;

    use crate::testkit::{
        init_debug_app, init_graphql_request, init_service_from_config_inline, upstream_config,
    };

    #[ntex::test]
    async fn should_expose_request_metrics() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/")
            .with_status(200)
            .create_async()
            .await;

        let app = init_service_from_config_inline(&upstream_config(
            &upstream.url(),
            "http://127.0.0.1:1/",
        ))
        .await
        .unwrap();

        let req = init_graphql_request(r#"{ user(id: "1") { id } }"#);
        test::call_service(&app.app, req.to_request()).await;
        let req = init_graphql_request(r#"{ user(id: "1") { id name } }"#);
        test::call_service(&app.app, req.to_request()).await;

        let debug_app = init_debug_app(&app.shared_state).await;
        let req = test::TestRequest::get().uri("/debug/metrics").to_request();
        let resp = test::call_service(&debug_app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).expect("utf-8 body");
        assert!(body.contains(r#"graphql_requests_total{outcome="ok"} 1"#));
        assert!(body.contains(r#"graphql_requests_total{outcome="error"} 1"#));
        assert!(body.contains("graphql_request_duration_seconds_count 2"));
    }

    #[ntex::test]
    async fn should_answer_health_probe() {
        let app = init_service_from_config_inline(&upstream_config(
            "http://127.0.0.1:1/",
            "http://127.0.0.1:1/",
        ))
        .await
        .unwrap();

        let debug_app = init_debug_app(&app.shared_state).await;
        let req = test::TestRequest::get().uri("/debug/health").to_request();
        let resp = test::call_service(&debug_app, req).await;

        assert!(resp.status().is_success());
    }
}

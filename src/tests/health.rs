#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
        response::IntoResponse,
    };
    use tower::ServiceExt;

    use crate::{
        health::{handlers::RUNNING_MESSAGE, models::ProbeError},
        server::{
            app_state::AppState,
            error::{DATABASE_FAILED_MESSAGE, ServerError},
            router::build_router,
        },
        tests::{
            fakes::{BoundedProbe, ToggleProbe},
            setup_logging,
        },
    };

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_root(app: Router) -> (StatusCode, String) {
        send(app, Method::GET, "/").await
    }

    #[tokio::test]
    async fn reachable_database_reports_running() {
        setup_logging();
        let probe = ToggleProbe::new(true);
        let app = build_router(AppState::new(probe.clone()));

        let (status, body) = get_root(app).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Application is running!");
        assert_eq!(probe.calls(), 1);
    }

    #[tokio::test]
    async fn unreachable_database_reports_failure() {
        setup_logging();
        let app = build_router(AppState::new(ToggleProbe::new(false)));

        let (status, body) = get_root(app).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Database connection failed");
    }

    #[tokio::test]
    async fn responses_are_plain_text() {
        setup_logging();
        for healthy in [true, false] {
            let app = build_router(AppState::new(ToggleProbe::new(healthy)));
            let request = Request::builder().uri("/").body(Body::empty()).unwrap();
            let response = app.oneshot(request).await.unwrap();

            let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap();
            assert!(content_type.starts_with("text/plain"), "{}", content_type);
        }
    }

    #[tokio::test]
    async fn every_failure_kind_maps_to_the_same_response() {
        let errors = [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::Protocol("handshake aborted".into()),
            sqlx::Error::RowNotFound,
        ];

        for error in errors {
            let response = ServerError::from(ProbeError::from(error)).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(bytes, DATABASE_FAILED_MESSAGE.as_bytes());
        }
    }

    #[tokio::test]
    async fn next_request_after_outage_succeeds() {
        setup_logging();
        let probe = ToggleProbe::new(false);
        let app = build_router(AppState::new(probe.clone()));

        let (status, _) = get_root(app.clone()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        probe.set_healthy(true);

        let (status, body) = get_root(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, RUNNING_MESSAGE);
    }

    #[tokio::test]
    async fn repeated_requests_give_the_same_answer() {
        setup_logging();
        for healthy in [true, false] {
            let probe = ToggleProbe::new(healthy);
            let app = build_router(AppState::new(probe.clone()));

            let (first, _) = get_root(app.clone()).await;
            for _ in 0..5 {
                let (status, _) = get_root(app.clone()).await;
                assert_eq!(status, first);
            }

            assert_eq!(probe.calls(), 6);
        }
    }

    #[tokio::test]
    async fn concurrent_requests_queue_on_the_pool_limit() {
        setup_logging();
        let probe = BoundedProbe::new(10, Duration::from_millis(20));
        let app = build_router(AppState::new(probe.clone()));

        let requests = (0..20).map(|_| get_root(app.clone()));
        let results = futures::future::join_all(requests).await;

        assert_eq!(results.len(), 20);
        for (status, body) in results {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, RUNNING_MESSAGE);
        }

        assert!(probe.peak() <= 10, "peak was {}", probe.peak());
        assert!(probe.peak() > 0);
        assert_eq!(probe.open(), 0);
    }

    #[tokio::test]
    async fn head_behaves_like_get_without_body() {
        let app = build_router(AppState::new(ToggleProbe::new(true)));

        let (status, body) = send(app, Method::HEAD, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn other_methods_are_not_allowed() {
        let probe = ToggleProbe::new(true);
        let app = build_router(AppState::new(probe.clone()));

        let (status, _) = send(app, Method::POST, "/").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(probe.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let probe = ToggleProbe::new(true);
        let app = build_router(AppState::new(probe.clone()));

        let (status, _) = send(app, Method::GET, "/health").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(probe.calls(), 0);
    }
}

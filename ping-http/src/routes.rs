use axum::{routing::get, Router};
use tower::ServiceBuilder;

use crate::middlewares;

mod root_handlers;

pub(crate) fn register_routes() -> Router {
    Router::new().merge(root_handlers()).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middlewares::tracing_middleware))
            .layer(axum::middleware::from_fn(
                middlewares::processing_time_middleware,
            )),
    )
}

fn root_handlers() -> Router {
    Router::new().route("/ping", get(root_handlers::ping::ping_handler))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::register_routes;

    fn get_ping() -> Request<Body> {
        Request::builder().uri("/ping").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn ping_returns_200_pong() {
        let app = register_routes();

        let response = app.oneshot(get_ping()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("server-timing"));
        assert!(response.headers().contains_key("x-request-id"));
        assert!(response.headers().contains_key("x-correlation-id"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"pong");
    }

    #[tokio::test]
    async fn ping_rejects_non_get() {
        let app = register_routes();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/ping")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = register_routes();

        let request = Request::builder()
            .uri("/pingpong")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn client_request_id_is_reflected() {
        let app = register_routes();

        let request = Request::builder()
            .uri("/ping")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
    }

    #[tokio::test]
    async fn ping_handles_concurrent_requests() {
        let app = register_routes();

        let mut handles = Vec::with_capacity(100);
        for _ in 0..100 {
            let app = app.clone();
            handles.push(tokio::spawn(async move {
                let response = app.oneshot(get_ping()).await.unwrap();
                let status = response.status();
                let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
                (status, body)
            }));
        }

        for handle in handles {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(&body[..], b"pong");
        }
    }

    #[tokio::test]
    async fn ping_answers_over_tcp() {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, register_routes()).await.unwrap();
        });

        let response = reqwest::get(format!("http://{}/ping", addr)).await.unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "pong");
    }
}

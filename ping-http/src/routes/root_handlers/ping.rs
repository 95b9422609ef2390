use axum::{http::StatusCode, response::IntoResponse};

/// GET /ping
/// liveness probe, always answers 200 with a fixed body.
pub(crate) async fn ping_handler() -> impl IntoResponse {
    (StatusCode::OK, "pong")
}

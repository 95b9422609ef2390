use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::{info_span, Instrument};
use uuid::Uuid;

const REQUEST_ID_HEADER_NAME: &str = "x-request-id";

const CORRELATION_ID_HEADER_NAME: &str = "x-correlation-id";

/// Measures handler wall time and reports it through the Server-Timing header.
pub(crate) async fn processing_time_middleware(req: Request, next: Next) -> Response {
    let start = tokio::time::Instant::now();
    let mut response = next.run(req).await;
    let duration_ms = start.elapsed().as_millis();

    let value = format!("ping-http;dur={}", duration_ms);

    if let Ok(server_timing_value) = HeaderValue::from_str(&value) {
        response
            .headers_mut()
            .insert("Server-Timing", server_timing_value);
    }

    response
}

/// Runs the request inside a span carrying request id and correlation id,
/// and reflects both ids back on the response.
pub(crate) async fn tracing_middleware(req: Request, next: Next) -> Response {
    // request id comes from the client when set, otherwise generated here
    let request_id_header_val = req
        .headers()
        .get(REQUEST_ID_HEADER_NAME)
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static(""))
        });
    let request_id = request_id_header_val
        .to_str()
        .unwrap_or_default()
        .to_string();

    let correlation_id = Uuid::new_v4();
    let correlation_id_header_val = HeaderValue::from_str(&correlation_id.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static(""));

    let span = info_span!(
        "http_request",
        %request_id,
        %correlation_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    let mut response = next.run(req).instrument(span).await;

    response
        .headers_mut()
        .insert(REQUEST_ID_HEADER_NAME, request_id_header_val);
    response
        .headers_mut()
        .insert(CORRELATION_ID_HEADER_NAME, correlation_id_header_val);

    response
}

use std::sync::Arc;

use ping_utils::{graceful_util, tracing_util};
use tokio::{net::TcpListener, sync::Notify};

mod global;
mod middlewares;
mod routes;

#[tokio::main]
async fn main() {
    tracing_util::init_tracing("ping-http");

    let cfg = global::config();

    let notify_shutdown = Arc::new(Notify::new());
    graceful_util::graceful_shutdown(
        notify_shutdown.clone(),
        Some(async {
            tracing::info!("closing http server...");
        }),
    )
    .await;

    let listener = TcpListener::bind(("0.0.0.0", cfg.http_port))
        .await
        .expect("ping-http: failed listening to tcp");

    tracing::info!(
        "server is listening on {}",
        listener.local_addr().expect("ping-http: invalid address")
    );

    axum::serve(listener, routes::register_routes())
        .with_graceful_shutdown(graceful_util::wait_for_shutdown(notify_shutdown))
        .await
        .expect("ping-http: server failed");
}

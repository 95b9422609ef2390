use std::{future::Future, sync::Arc};

use tokio::{signal, sync::Notify};

/// Spawn a background listener that releases `notify` once an OS shutdown
/// signal arrives, after awaiting the optional cleanup.
pub async fn graceful_shutdown<F>(notify: Arc<Notify>, cleanup: Option<F>)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = shutdown_signal().await {
            tracing::error!("shutdown signal error: {:?}", err);
        }
        tracing::info!("shutdown signal received");

        if let Some(cleanup) = cleanup {
            tracing::info!("running cleanup...");
            cleanup.await;
        }

        notify.notify_one();
    });
}

/// Wait until the shutdown listener releases the notify.
pub async fn wait_for_shutdown(notify: Arc<Notify>) {
    notify.notified().await;
}

/// Ctrl+C on all platforms, SIGTERM as well on unix.
async fn shutdown_signal() -> Result<(), std::io::Error> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;
        let ctrl_c = signal::ctrl_c();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("signal ctrl+c received");
            },
            _ = sigterm.recv() => {
                tracing::info!("signal sigterm received");
            },
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn notify_releases_waiter() {
        let notify = Arc::new(Notify::new());
        let waiter = tokio::spawn(wait_for_shutdown(notify.clone()));

        notify.notify_one();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter did not wake")
            .unwrap();
    }
}

//! Waiting for the operator to stop the server.

use std::future::Future;
use tracing::{error, info};

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    until_signal(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. If the handler could not be installed the
/// failure is logged and this never resolves, so the server keeps running
/// until the process is killed.
pub async fn until_signal(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Ctrl-C received"),
        Err(e) => {
            error!(error = %e, "Failed to install Ctrl-C handler; stop the process to exit");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_resolves_when_signal_fires() {
        let fired = async { Ok::<(), std::io::Error>(()) };
        let waited = timeout(Duration::from_secs(1), until_signal(fired)).await;
        assert!(waited.is_ok());
    }

    #[tokio::test]
    async fn test_broken_handler_does_not_trigger_shutdown() {
        let broken = async { Err::<(), _>(std::io::Error::other("no signal support")) };
        let waited = timeout(Duration::from_millis(50), until_signal(broken)).await;
        assert!(waited.is_err());
    }
}

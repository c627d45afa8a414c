//! Shutdown signal handling

use tracing::info;

/// Resolve when the process is asked to stop (SIGINT/SIGTERM, or Ctrl+C
/// where Unix signals are unavailable).
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let (mut sigint, mut sigterm) = match (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) {
        (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
        _ => {
            // Fall back to Ctrl+C only
            let _ = tokio::signal::ctrl_c().await;
            info!("received Ctrl+C");
            return;
        }
    };

    tokio::select! {
        _ = sigint.recv() => info!("received SIGINT"),
        _ = sigterm.recv() => info!("received SIGTERM"),
    }
}

#[cfg(not(unix))]
pub async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("received Ctrl+C");
}

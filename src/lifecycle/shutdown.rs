//! Signal handling for graceful shutdown

use std::future;

use tracing::{debug, warn};

/// Handles shutdown signals (Ctrl+C, and SIGTERM on unix)
pub struct ShutdownSignal;

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self
    }

    /// Wait for a shutdown signal
    ///
    /// A signal that cannot be registered is logged and never fires.
    pub async fn wait(&self) {
        tokio::select! {
            _ = interrupt() => {
                debug!("received interrupt");
            }
            _ = terminate() => {
                debug!("received SIGTERM");
            }
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(?e, "failed to register Ctrl+C handler");
        future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!(?e, "failed to register SIGTERM handler");
            future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    future::pending::<()>().await;
}

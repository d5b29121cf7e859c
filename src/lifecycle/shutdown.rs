//! Signal handling for graceful shutdown

use tokio::signal::unix::{signal, SignalKind};
use tracing::{debug, warn};

/// Waits for SIGTERM or SIGINT
pub struct ShutdownSignal;

impl ShutdownSignal {
    pub fn new() -> Self {
        Self
    }

    /// Wait for a shutdown signal and return its name.
    ///
    /// If the handlers cannot be installed this never resolves, leaving
    /// end of input as the only way out.
    pub async fn wait(&self) -> &'static str {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
                (Err(e), _) | (_, Err(e)) => {
                    warn!(error = %e, "failed to register shutdown signal handlers");
                    return std::future::pending().await;
                }
            };

        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };
        debug!(signal = name, "received shutdown signal");
        name
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

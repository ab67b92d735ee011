//! OS signal handling.
//!
//! Ctrl-C (SIGINT) ends the interactive session through the shutdown
//! coordinator instead of killing the process mid-render.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::Shutdown;

/// Spawn a task that triggers `shutdown` on the first Ctrl-C.
pub fn spawn_signal_handler(shutdown: Arc<Shutdown>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received, shutting down");
                shutdown.trigger();
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for interrupt signal"),
        }
    })
}

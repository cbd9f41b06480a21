//! OS signal handling for graceful shutdown

use lcars_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Spawn a task that turns SIGINT/SIGTERM into [`Message::Quit`].
///
/// The render loop drains the channel once per frame, so the frame in
/// flight always completes before the shell stops. Abort the returned
/// handle once the loop has exited.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Shell already stopped");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

/// Wait for a termination signal and return its name
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c().await?;
        Ok("Ctrl+C")
    }
}

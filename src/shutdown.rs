//! SIGINT / SIGTERM handling
//!
//! The handler thread installed by `ctrlc` only forwards a token over a
//! channel; the main thread blocks on that channel until the first
//! signal arrives.
//!
//! `ctrlc` is built with its `termination` feature, which also routes
//! SIGHUP to the same handler. A hangup therefore tears the link down like
//! SIGINT and SIGTERM do.

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::error::{LinkerError, Result};

pub struct ShutdownSignal {
    receiver: Receiver<()>,
}

impl ShutdownSignal {
    /// Register the process-wide handler for SIGINT and SIGTERM.
    ///
    /// Can only succeed once per process.
    pub fn install() -> Result<Self> {
        let (sender, signal) = Self::channel();

        ctrlc::set_handler(move || {
            log::info!("🛑 Received SIGINT/SIGTERM");
            // Repeated signals are dropped once a request is pending
            let _ = sender.try_send(());
        })
        .map_err(|e| LinkerError::Shutdown(format!("cannot install signal handler: {}", e)))?;

        Ok(signal)
    }

    /// A signal triggered by hand through the returned sender
    pub fn channel() -> (Sender<()>, Self) {
        let (sender, receiver) = bounded(1);
        (sender, Self { receiver })
    }

    /// Block until a shutdown request arrives
    pub fn wait(&self) -> Result<()> {
        self.receiver
            .recv()
            .map_err(|_| LinkerError::Shutdown("signal channel closed".to_string()))
    }
}

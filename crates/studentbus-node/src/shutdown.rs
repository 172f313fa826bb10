//! Cooperative shutdown flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::error::NodeError;

/// Longest single sleep inside [`ShutdownSignal::wait`]
const WAIT_SLICE: Duration = Duration::from_millis(100);

/// Shared stop flag for the run loops
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    triggered: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Trigger on Ctrl+C (SIGINT). Can be installed once per process.
    pub fn install_ctrlc_handler(&self) -> Result<(), NodeError> {
        let signal = self.clone();
        ctrlc::set_handler(move || {
            info!("Received interrupt signal. Shutting down gracefully...");
            signal.trigger();
        })?;
        Ok(())
    }

    /// Sleep for `duration` unless shutdown is triggered first.
    ///
    /// Returns `true` if the full duration elapsed, `false` on shutdown.
    pub fn wait(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.is_triggered() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            std::thread::sleep((deadline - now).min(WAIT_SLICE));
        }
    }
}

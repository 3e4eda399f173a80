use crate::error::{SchemaError, SchemaResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for a reconciliation run.
///
/// Clones observe the same flag. The engine checks it before every remote
/// call; calls already in flight are left to finish.
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    cancelled: Arc<AtomicBool>,
}

impl CancellationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns `Err(SchemaError::Cancelled)` once the signal is raised.
    pub fn check(&self) -> SchemaResult<()> {
        if self.is_cancelled() {
            Err(SchemaError::Cancelled)
        } else {
            Ok(())
        }
    }
}

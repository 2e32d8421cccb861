use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Signalled when a run observes a cancellation request.
///
/// Distinct from ordinary failures so callers can tell an aborted run from
/// a bad input.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("run canceled")]
pub struct Canceled;

/// Cooperative cancellation token.
///
/// Clones share one flag; a controller keeps one clone and hands another to
/// the run. Stages poll `check` at bounded intervals (per row, per angle)
/// and abort between primitives, never mid-convolution.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every run holding a clone of this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Poll the token, returning `Err(Canceled)` once cancellation has been
    /// requested.
    #[inline]
    pub fn check(&self) -> Result<(), Canceled> {
        if self.is_canceled() {
            Err(Canceled)
        } else {
            Ok(())
        }
    }
}

//! In-flight request gating.
//!
//! A [`LoadingFlag`] admits one request at a time. A second request while one
//! is in flight is rejected, not queued. The flag clears when the returned
//! guard drops, including when the request future is cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "loading" flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    active: Arc<AtomicBool>,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Mark a request as started, or `None` if one already is.
    pub fn try_begin(&self) -> Option<LoadingGuard> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadingGuard {
                active: Arc::clone(&self.active),
            })
    }
}

/// Clears its [`LoadingFlag`] on drop.
#[derive(Debug)]
pub struct LoadingGuard {
    active: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

//! Shared "request in flight" indicator.
//!
//! DESIGN
//! ======
//! Every flow that talks to the backend must hold a [`LoadingGuard`] for the
//! duration of its request. Acquisition fails while another holder exists, so
//! a second trigger is rejected instead of racing the first. The guard clears
//! the flag on drop, which also covers a flow future dropped mid-request.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct LoadingIndicator {
    active: Arc<AtomicBool>,
}

impl LoadingIndicator {
    /// Claim the indicator, or `None` if a request is already pending.
    pub fn try_begin(&self) -> Option<LoadingGuard> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadingGuard { active: self.active.clone() })
    }

    pub fn is_loading(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// Holds the indicator until dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    active: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

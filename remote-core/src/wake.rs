//! One-slot wake latch shared with the pin-change interrupt handler

// portable-atomic rather than core: rv32ec has no native atomic RMW, and
// `consume` needs a real swap.
use portable_atomic::{AtomicBool, Ordering};

/// Single-slot wake notification.
///
/// The pin-change handler calls [`signal`](WakeLatch::signal) and masks
/// further interrupts before returning, so at most one wake is ever
/// pending. The suspended flow takes it with [`consume`](WakeLatch::consume);
/// a deep-sleep implementation must drain the latch before suspending so
/// a stale wake cannot fire the next wait early.
pub struct WakeLatch {
    pending: AtomicBool,
}

impl WakeLatch {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Post a wake. Safe to call from interrupt context.
    pub fn signal(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Take the pending wake, if any. Each posted wake is consumed
    /// exactly once.
    pub fn consume(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for WakeLatch {
    fn default() -> Self {
        Self::new()
    }
}

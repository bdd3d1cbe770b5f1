//! Re-entrancy gate for one-at-a-time actions

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Non-blocking binary gate.
///
/// `try_acquire` never waits: while a permit is live, every further call
/// returns `None` and the caller drops its trigger on the floor. Clones
/// share the same gate.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    busy: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate if it is free.
    pub fn try_acquire(&self) -> Option<FlightPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| FlightPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Relaxed)
    }
}

/// Live claim on a [`SingleFlight`] gate. Dropping the permit releases
/// the gate on every exit path, unwinding included.
#[derive(Debug)]
pub struct FlightPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

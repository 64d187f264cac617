use std::sync::atomic::{AtomicBool, Ordering};

use fw_core::wizard::WizardState;
use tokio::sync::{Mutex, MutexGuard};

/// In-memory home of one wizard session.
///
/// Holds the aggregate, the lock that serializes dispatches, and whether the
/// session has already been seeded from the server record.
///
/// Take `dispatch_lock` before touching `state` for writing. Seeding is
/// claimed under `dispatch_lock` too, so a seed can never land on top of an
/// edit that was dispatched first.
pub struct WizardContext {
    state: Mutex<WizardState>,
    dispatch_lock: Mutex<()>,
    seeded: AtomicBool,
}

impl WizardContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
            seeded: AtomicBool::new(false),
        }
    }

    pub async fn snapshot(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    pub async fn lock_dispatch(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Caller must hold the dispatch lock.
    pub async fn replace(&self, state: WizardState) {
        *self.state.lock().await = state;
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.load(Ordering::SeqCst)
    }

    /// Returns `true` exactly once, for the caller that gets to seed.
    pub fn claim_seed(&self) -> bool {
        !self.seeded.swap(true, Ordering::SeqCst)
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardState::default())
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fomo_core::registration::RegistrationState;
use tokio::sync::{Mutex, MutexGuard};

/// Shared registration context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for the whole transition + actions loop.
/// - `state`: short reads and writes.
pub(crate) struct RegistrationContext {
    state: Arc<Mutex<RegistrationState>>,
    dispatch_lock: Arc<Mutex<()>>,
    loading: AtomicBool,
}

/// Held while a dispatch is in flight. Clears the loading flag on drop.
pub(crate) struct DispatchGuard<'a> {
    _lock: MutexGuard<'a, ()>,
    loading: &'a AtomicBool,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::SeqCst);
    }
}

impl RegistrationContext {
    pub fn new(initial_state: RegistrationState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
            loading: AtomicBool::new(false),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> RegistrationState {
        self.state.lock().await.clone()
    }

    /// Non-blocking: `None` when another dispatch holds the lock.
    pub fn try_acquire_dispatch(&self) -> Option<DispatchGuard<'_>> {
        let lock = self.dispatch_lock.try_lock().ok()?;
        self.loading.store(true, Ordering::SeqCst);
        Some(DispatchGuard {
            _lock: lock,
            loading: &self.loading,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Only call while holding a [`DispatchGuard`].
    pub async fn set_state(&self, state: RegistrationState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}

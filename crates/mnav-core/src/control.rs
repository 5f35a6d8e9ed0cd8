//! Navigation control: cancel handles and the single-flight slot.
//!
//! The controller keeps exactly one "current" navigation in a [`NavigationSlot`].
//! Starting a new navigation cancels the previous handle and installs a fresh one;
//! an attempt may only publish while it is still the slot's current entry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

/// Cooperative cancellation signal shared between the controller and a fetch.
///
/// Clones observe the same signal. The fetcher only ever reads it; the slot is
/// the only place that cancels.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the handle is cancelled (immediately if it already is).
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}

/// The slot's view of the live navigation.
#[derive(Debug)]
struct Active {
    id: u64,
    cancel: CancelHandle,
}

/// Holder of the one live navigation.
///
/// Every closure passed to the slot runs while its lock is held, so "am I
/// still current?" and the publication that follows cannot interleave with a
/// newer navigation taking over. Closures must not call back into the slot.
#[derive(Debug, Default)]
pub struct NavigationSlot {
    next_id: AtomicU64,
    current: Mutex<Option<Active>>,
}

impl NavigationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Active>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Supersedes the current navigation (if any) and installs a new one.
    ///
    /// `on_start` runs under the lock after the swap. Returns the new id and
    /// the handle to hand to the fetcher.
    pub fn begin<F>(&self, on_start: F) -> (u64, CancelHandle)
    where
        F: FnOnce(u64),
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let cancel = CancelHandle::new();
        let mut current = self.lock();
        if let Some(previous) = current.take() {
            previous.cancel.cancel();
            tracing::debug!(superseded = previous.id, by = id, "navigation superseded");
        }
        *current = Some(Active {
            id,
            cancel: cancel.clone(),
        });
        on_start(id);
        (id, cancel)
    }

    /// Retires navigation `id` if it is still current, running `publish` first.
    ///
    /// Returns false (and runs nothing) when `id` was superseded.
    pub fn finish<F>(&self, id: u64, publish: F) -> bool
    where
        F: FnOnce(),
    {
        let mut current = self.lock();
        match current.as_ref() {
            Some(active) if active.id == id => {
                publish();
                *current = None;
                true
            }
            _ => false,
        }
    }

    /// Runs `f` under the lock without touching the current navigation.
    pub fn with_lock<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _current = self.lock();
        f()
    }

    /// Signals cancellation on the current navigation but leaves it current,
    /// so its own outcome is still published. Returns false if idle.
    pub fn cancel_current(&self) -> bool {
        match self.lock().as_ref() {
            Some(active) => {
                active.cancel.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_some()
    }

    /// Id of the current navigation, if any.
    pub fn current_id(&self) -> Option<u64> {
        self.lock().as_ref().map(|active| active.id)
    }
}

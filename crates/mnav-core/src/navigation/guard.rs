//! RAII guard that ends the busy interval of a navigation.

use super::outcome::NavigationOutcome;
use super::publish;
use crate::control::NavigationSlot;
use crate::presentation::PresentationSink;

/// Publishes the outcome and clears `busy` for navigation `id`, or, if dropped
/// without [`complete`](BusyGuard::complete) (panic, dropped future), still
/// clears `busy`. Either path is a no-op once `id` has been superseded.
pub(super) struct BusyGuard<'a, S: PresentationSink> {
    slot: &'a NavigationSlot,
    sink: &'a S,
    id: u64,
    armed: bool,
}

impl<'a, S: PresentationSink> BusyGuard<'a, S> {
    pub(super) fn new(slot: &'a NavigationSlot, sink: &'a S, id: u64) -> Self {
        Self {
            slot,
            sink,
            id,
            armed: true,
        }
    }

    /// Returns false if the navigation was superseded and nothing was published.
    pub(super) fn complete(mut self, outcome: &NavigationOutcome) -> bool {
        self.armed = false;
        let sink = self.sink;
        self.slot.finish(self.id, || {
            publish(sink, outcome);
            sink.set_busy(false);
        })
    }
}

impl<S: PresentationSink> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let sink = self.sink;
        if self.slot.finish(self.id, || sink.set_busy(false)) {
            tracing::warn!(id = self.id, "navigation ended without an outcome");
        }
    }
}

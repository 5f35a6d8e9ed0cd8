//! Presentation boundary: what the controller tells the UI.
//!
//! The controller only talks to a [`PresentationSink`]. [`UiStateSink`] is the
//! stock implementation: it folds updates into a [`UiState`] published on a
//! tokio watch channel, so any front-end can render from snapshots.

use std::sync::Arc;

use tokio::sync::watch;

/// Receiver of status, content and busy updates.
///
/// Calls arrive while the controller holds its navigation lock; implementations
/// must be quick and must not call back into the controller.
pub trait PresentationSink: Send + Sync {
    fn set_status(&self, text: &str);
    fn set_content(&self, text: &str);
    fn set_busy(&self, busy: bool);
}

impl<S: PresentationSink + ?Sized> PresentationSink for Arc<S> {
    fn set_status(&self, text: &str) {
        (**self).set_status(text);
    }

    fn set_content(&self, text: &str) {
        (**self).set_content(text);
    }

    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }
}

/// What the presentation layer shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub status_text: String,
    pub content_text: String,
    /// True while a navigation is in flight (input should be disabled).
    pub busy: bool,
}

/// Sink that keeps the latest [`UiState`] and notifies subscribers.
pub struct UiStateSink {
    tx: watch::Sender<UiState>,
}

impl UiStateSink {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(UiState::default());
        Self { tx }
    }

    /// Current state.
    pub fn snapshot(&self) -> UiState {
        self.tx.borrow().clone()
    }

    /// Receiver that wakes on every change.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }
}

impl Default for UiStateSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSink for UiStateSink {
    fn set_status(&self, text: &str) {
        self.tx.send_modify(|state| state.status_text = text.to_string());
    }

    fn set_content(&self, text: &str) {
        self.tx.send_modify(|state| state.content_text = text.to_string());
    }

    fn set_busy(&self, busy: bool) {
        self.tx.send_modify(|state| state.busy = busy);
    }
}

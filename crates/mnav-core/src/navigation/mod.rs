//! Navigation controller: validate, supersede, fetch, publish.
//!
//! ```text
//! Idle -> Validating -> Cancelling-Previous -> Fetching -> Publishing -> Idle
//! ```
//!
//! Validation failures publish a rejection and return without touching the
//! in-flight navigation or `busy`. An accepted input cancels whatever was in
//! flight, marks the UI busy and fetches; the result is published only if no
//! newer navigation started in the meantime.

mod guard;
mod outcome;
mod request;

use url::Url;

use crate::control::NavigationSlot;
use crate::fetch::Fetch;
use crate::presentation::PresentationSink;
use crate::url_model::normalize;

use guard::BusyGuard;
pub use outcome::{
    loading_status, NavigationOutcome, CANCELLED_STATUS, EMPTY_INPUT_STATUS, HTTP_ERROR_STATUS,
    INVALID_URL_STATUS, LOADING_PLACEHOLDER, UNEXPECTED_ERROR_STATUS,
};
pub use request::NavigationRequest;

/// Writes `outcome` to the sink (status always, content unless left untouched).
fn publish<S: PresentationSink + ?Sized>(sink: &S, outcome: &NavigationOutcome) {
    sink.set_status(&outcome.status_text());
    if let Some(content) = outcome.content_text() {
        sink.set_content(content);
    }
}

/// Drives one navigation at a time against a fetcher and a presentation sink.
///
/// `navigate` takes `&self`, so triggers may come from concurrent tasks; the
/// controller's slot makes the newest accepted navigation the only one that
/// can publish.
pub struct NavigationController<F, S> {
    fetcher: F,
    sink: S,
    slot: NavigationSlot,
}

impl<F: Fetch, S: PresentationSink> NavigationController<F, S> {
    pub fn new(fetcher: F, sink: S) -> Self {
        Self {
            fetcher,
            sink,
            slot: NavigationSlot::new(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// True while an accepted navigation has not yet published its outcome.
    pub fn is_busy(&self) -> bool {
        self.slot.is_active()
    }

    /// Navigates to `raw_input`.
    ///
    /// Returns the published outcome, or `None` if this navigation was
    /// superseded before it finished (nothing was published for it).
    /// Same-URL navigations are not deduplicated.
    pub async fn navigate(&self, raw_input: &str) -> Option<NavigationOutcome> {
        let url = match normalize(raw_input) {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!(input = raw_input, error = %err, "navigation input rejected");
                let outcome = NavigationOutcome::from(err);
                self.slot.with_lock(|| publish(&self.sink, &outcome));
                return Some(outcome);
            }
        };

        let request = self.begin(raw_input, url);
        let guard = BusyGuard::new(&self.slot, &self.sink, request.id());
        let result = self.fetcher.fetch(request.url(), request.cancel()).await;
        let outcome = NavigationOutcome::from(result);

        if !guard.complete(&outcome) {
            tracing::debug!(id = request.id(), "discarding result of superseded navigation");
            return None;
        }
        log_outcome(&request, &outcome);
        Some(outcome)
    }

    /// Cancels the in-flight navigation without starting another.
    ///
    /// The cancelled navigation still owns the UI and publishes its
    /// `Cancelled` outcome. Returns false when idle.
    pub fn stop(&self) -> bool {
        let stopped = self.slot.cancel_current();
        if stopped {
            tracing::info!("navigation stop requested");
        }
        stopped
    }

    fn begin(&self, raw_input: &str, url: Url) -> NavigationRequest {
        let sink = &self.sink;
        let (id, cancel) = self.slot.begin(|id| {
            tracing::info!(id, url = %url, "navigation started");
            sink.set_busy(true);
            sink.set_status(&loading_status(&url));
            sink.set_content(LOADING_PLACEHOLDER);
        });
        NavigationRequest::new(id, raw_input, url, cancel)
    }
}

fn log_outcome(request: &NavigationRequest, outcome: &NavigationOutcome) {
    let id = request.id();
    let url = request.url();
    match outcome {
        NavigationOutcome::Success { length, .. } => {
            tracing::info!(id, url = %url, length, "navigation completed");
        }
        NavigationOutcome::Cancelled => tracing::info!(id, url = %url, "navigation cancelled"),
        NavigationOutcome::NetworkError(detail) => {
            tracing::warn!(id, url = %url, error = %detail, "navigation failed");
        }
        NavigationOutcome::UnexpectedError(detail) => {
            tracing::warn!(id, url = %url, error = %detail, "navigation hit an unexpected error");
        }
        NavigationOutcome::InvalidInput(_) | NavigationOutcome::MalformedUrl => {}
    }
}

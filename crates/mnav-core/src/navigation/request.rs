//! One accepted navigation attempt.

use url::Url;

use crate::control::CancelHandle;

/// An accepted navigation: owned by the controller from the moment the input
/// validated until its outcome is published or it is superseded.
#[derive(Debug)]
pub struct NavigationRequest {
    id: u64,
    raw_input: String,
    url: Url,
    cancel: CancelHandle,
}

impl NavigationRequest {
    pub(crate) fn new(id: u64, raw_input: &str, url: Url, cancel: CancelHandle) -> Self {
        Self {
            id,
            raw_input: raw_input.to_string(),
            url,
            cancel,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Text as typed, before trimming.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn cancel(&self) -> &CancelHandle {
        &self.cancel
    }
}

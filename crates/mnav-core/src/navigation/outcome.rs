//! Navigation outcome and its mapping to status/content text.

use url::Url;

use crate::fetch::{FetchError, FetchErrorKind, Page};
use crate::url_model::NormalizeError;

pub const EMPTY_INPUT_STATUS: &str = "Enter a URL.";
pub const INVALID_URL_STATUS: &str = "Invalid URL.";
pub const CANCELLED_STATUS: &str = "Navigation cancelled.";
pub const HTTP_ERROR_STATUS: &str = "HTTP error.";
pub const UNEXPECTED_ERROR_STATUS: &str = "Unexpected error.";
/// Content shown while a fetch is in flight.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

pub fn loading_status(url: &Url) -> String {
    format!("Loading: {url}")
}

/// Result of one navigation attempt. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Cancelled,
    /// Input rejected before parsing (e.g. `"empty"`).
    InvalidInput(String),
    MalformedUrl,
    NetworkError(String),
    Success { body: String, length: usize },
    /// Full diagnostic, including the error's causes.
    UnexpectedError(String),
}

impl NavigationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationOutcome::Success { .. })
    }

    pub fn status_text(&self) -> String {
        match self {
            NavigationOutcome::Cancelled => CANCELLED_STATUS.to_string(),
            NavigationOutcome::InvalidInput(_) => EMPTY_INPUT_STATUS.to_string(),
            NavigationOutcome::MalformedUrl => INVALID_URL_STATUS.to_string(),
            NavigationOutcome::NetworkError(_) => HTTP_ERROR_STATUS.to_string(),
            NavigationOutcome::Success { length, .. } => format!("OK - {length} characters"),
            NavigationOutcome::UnexpectedError(_) => UNEXPECTED_ERROR_STATUS.to_string(),
        }
    }

    /// New content text, or `None` to leave the current content alone.
    pub fn content_text(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Cancelled => None,
            NavigationOutcome::InvalidInput(_) | NavigationOutcome::MalformedUrl => Some(""),
            NavigationOutcome::NetworkError(detail)
            | NavigationOutcome::UnexpectedError(detail) => Some(detail),
            NavigationOutcome::Success { body, .. } => Some(body),
        }
    }
}

impl From<NormalizeError> for NavigationOutcome {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::Empty => NavigationOutcome::InvalidInput(err.to_string()),
            NormalizeError::Malformed(_) => NavigationOutcome::MalformedUrl,
        }
    }
}

impl From<FetchError> for NavigationOutcome {
    fn from(err: FetchError) -> Self {
        match err.kind() {
            FetchErrorKind::Cancelled => NavigationOutcome::Cancelled,
            FetchErrorKind::Network => NavigationOutcome::NetworkError(err.to_string()),
            FetchErrorKind::Unexpected => {
                NavigationOutcome::UnexpectedError(format!("{:?}", anyhow::Error::new(err)))
            }
        }
    }
}

impl From<Result<Page, FetchError>> for NavigationOutcome {
    fn from(result: Result<Page, FetchError>) -> Self {
        match result {
            Ok(Page { body, length }) => NavigationOutcome::Success { body, length },
            Err(err) => err.into(),
        }
    }
}

//! Fetch error type and its network/unexpected classification.

use thiserror::Error;

/// How a fetch failure is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The navigation was cancelled; not an error from the user's point of view.
    Cancelled,
    /// Non-2xx status or a transport-level failure.
    Network,
    /// Anything else.
    Unexpected,
}

/// Error returned by a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("navigation cancelled")]
    Cancelled,
    /// Response headers carried a non-2xx status; the body was not downloaded.
    #[error(
        "response status code does not indicate success: {}",
        status_summary(.code, .reason)
    )]
    Status { code: u32, reason: String },
    /// Resolve, connect, TLS, send/receive or redirect failure.
    #[error("{0}")]
    Transport(#[source] curl::Error),
    /// libcurl fault that is not a transport failure (bad option, out of memory, ...).
    #[error("HTTP client failure")]
    Client(#[source] curl::Error),
    #[error("unsupported URL scheme `{0}` (only http and https can be fetched)")]
    UnsupportedScheme(String),
    /// `Content-Type` declared a charset this build cannot decode.
    #[error("unsupported response charset `{0}`")]
    Charset(String),
    /// The blocking transfer task panicked or was torn down.
    #[error("fetch worker failed: {0}")]
    Worker(String),
}

fn status_summary(code: &u32, reason: &str) -> String {
    if reason.is_empty() {
        code.to_string()
    } else {
        format!("{code} ({reason})")
    }
}

impl FetchError {
    /// Wraps a libcurl error, splitting transport failures from client faults.
    pub fn from_curl(e: curl::Error) -> Self {
        if is_transport_error(&e) {
            FetchError::Transport(e)
        } else {
            FetchError::Client(e)
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Cancelled => FetchErrorKind::Cancelled,
            FetchError::Status { .. } | FetchError::Transport(_) => FetchErrorKind::Network,
            FetchError::Client(_)
            | FetchError::UnsupportedScheme(_)
            | FetchError::Charset(_)
            | FetchError::Worker(_) => FetchErrorKind::Unexpected,
        }
    }
}

/// True for libcurl errors that mean "the network or the server let us down".
pub fn is_transport_error(e: &curl::Error) -> bool {
    e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_operation_timedout()
        || e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_too_many_redirects()
        || e.is_partial_file()
        || e.is_bad_content_encoding()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_network() {
        let e = FetchError::Status {
            code: 404,
            reason: "Not Found".into(),
        };
        assert_eq!(e.kind(), FetchErrorKind::Network);
        assert_eq!(
            e.to_string(),
            "response status code does not indicate success: 404 (Not Found)"
        );
    }

    #[test]
    fn status_without_reason_phrase() {
        let e = FetchError::Status {
            code: 503,
            reason: String::new(),
        };
        assert!(e.to_string().ends_with(": 503"));
    }

    #[test]
    fn connect_failure_is_transport() {
        // CURLE_COULDNT_CONNECT
        let e = FetchError::from_curl(curl::Error::new(7));
        assert!(matches!(e, FetchError::Transport(_)));
        assert_eq!(e.kind(), FetchErrorKind::Network);
    }

    #[test]
    fn bad_argument_is_unexpected() {
        // CURLE_BAD_FUNCTION_ARGUMENT
        let e = FetchError::from_curl(curl::Error::new(43));
        assert!(matches!(e, FetchError::Client(_)));
        assert_eq!(e.kind(), FetchErrorKind::Unexpected);
    }

    #[test]
    fn cancelled_and_local_faults() {
        assert_eq!(FetchError::Cancelled.kind(), FetchErrorKind::Cancelled);
        assert_eq!(
            FetchError::Charset("x-unknown".into()).kind(),
            FetchErrorKind::Unexpected
        );
        assert_eq!(
            FetchError::UnsupportedScheme("ftp".into()).kind(),
            FetchErrorKind::Unexpected
        );
    }
}

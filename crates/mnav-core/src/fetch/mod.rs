//! Single cancellable HTTP GET.
//!
//! [`CurlFetcher`] runs the transfer with libcurl on a tokio blocking thread,
//! reading headers before the body, and races it against the navigation's
//! [`CancelHandle`] so a superseded fetch returns immediately. The blocking
//! side notices the same handle at its next callback and unwinds.

mod decode;
mod error;
mod head;
mod pool;
mod transfer;

use std::future::Future;
use std::sync::Arc;

use url::Url;

use crate::config::MnavConfig;
use crate::control::CancelHandle;

pub use error::{is_transport_error, FetchError, FetchErrorKind};
use pool::HandlePool;

/// Client identification sent with every request.
pub const DEFAULT_USER_AGENT: &str = "MiniBrowser/0.1 (+mnav)";

/// A successfully fetched body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Decoded response body.
    pub body: String,
    /// Length of `body` in characters.
    pub length: usize,
}

impl Page {
    pub fn new(body: String) -> Self {
        let length = body.chars().count();
        Self { body, length }
    }
}

/// Fixed request options, set once when the fetcher is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub follow_redirects: bool,
    pub max_redirections: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            follow_redirects: true,
            max_redirections: 50,
        }
    }
}

impl From<&MnavConfig> for FetchOptions {
    fn from(cfg: &MnavConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            follow_redirects: cfg.follow_redirects,
            max_redirections: cfg.max_redirections,
        }
    }
}

/// Performs one GET per call, observing `cancel` until it returns.
///
/// Implementations must not retry and must turn every failure into a
/// [`FetchError`]; nothing may escape as a panic they could have caught.
pub trait Fetch: Send + Sync {
    fn fetch(
        &self,
        url: &Url,
        cancel: &CancelHandle,
    ) -> impl Future<Output = Result<Page, FetchError>> + Send;
}

/// libcurl-backed fetcher. Cheap to clone; clones share the handle pool.
#[derive(Clone)]
pub struct CurlFetcher {
    options: Arc<FetchOptions>,
    pool: Arc<HandlePool>,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self {
            options: Arc::new(options),
            pool: Arc::new(HandlePool::new()),
        }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(FetchOptions::default())
    }
}

impl Fetch for CurlFetcher {
    async fn fetch(&self, url: &Url, cancel: &CancelHandle) -> Result<Page, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
        }

        let task = {
            let url = url.clone();
            let options = Arc::clone(&self.options);
            let pool = Arc::clone(&self.pool);
            let cancel = cancel.clone();
            tokio::task::spawn_blocking(move || {
                let mut easy = pool.checkout();
                let result = transfer::perform_get(&mut easy, &url, &options, &cancel);
                pool.checkin(easy);
                result
            })
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            joined = task => match joined {
                Ok(result) => result,
                Err(e) => Err(FetchError::Worker(e.to_string())),
            },
        }
    }
}

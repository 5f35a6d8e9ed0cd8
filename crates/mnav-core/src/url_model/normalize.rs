//! Address normalization: trim, default the scheme, parse.

use thiserror::Error;
use url::Url;

/// Marker that decides whether the input already names a scheme.
pub const SCHEME_SEPARATOR: &str = "://";

/// Prepended when the input has no [`SCHEME_SEPARATOR`].
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Why raw input was rejected before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Input was empty or whitespace only.
    #[error("empty")]
    Empty,
    /// Input (after scheme defaulting) is not an absolute URL.
    #[error("malformed URL: {0}")]
    Malformed(#[from] url::ParseError),
}

/// Normalizes address-bar text into an absolute URL.
///
/// The input is trimmed; if it contains no `"://"` it is prefixed with
/// `"https://"`, and the result is parsed. That is the only rewrite: no
/// `www.` stripping, no port injection, no IDNA guessing beyond what the URL
/// parser itself does.
///
/// # Examples
///
/// - `normalize("example.com")` → `https://example.com/`
/// - `normalize("http://x")` → `http://x/`
/// - `normalize("   ")` → `Err(NormalizeError::Empty)`
pub fn normalize(raw: &str) -> Result<Url, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Empty);
    }

    let url = if trimmed.contains(SCHEME_SEPARATOR) {
        Url::parse(trimmed)?
    } else {
        Url::parse(&format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"))?
    };
    Ok(url)
}

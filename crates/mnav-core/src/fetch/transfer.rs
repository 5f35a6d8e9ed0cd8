//! Blocking GET on a libcurl easy handle.
//!
//! Runs on a blocking thread. The cancel handle is polled from the header,
//! write and progress callbacks; returning false / 0 from any of them makes
//! libcurl abort the transfer.

use std::cell::Cell;

use curl::easy::Easy;
use url::Url;

use super::head::{self, parse_head};
use super::{decode::decode_body, FetchError, FetchOptions, Page};
use crate::control::CancelHandle;

pub(crate) fn perform_get(
    easy: &mut Easy,
    url: &Url,
    options: &FetchOptions,
    cancel: &CancelHandle,
) -> Result<Page, FetchError> {
    if cancel.is_cancelled() {
        return Err(FetchError::Cancelled);
    }

    easy.reset();
    easy.url(url.as_str()).map_err(FetchError::from_curl)?;
    easy.get(true).map_err(FetchError::from_curl)?;
    easy.useragent(&options.user_agent)
        .map_err(FetchError::from_curl)?;
    easy.follow_location(options.follow_redirects)
        .map_err(FetchError::from_curl)?;
    easy.max_redirections(options.max_redirections)
        .map_err(FetchError::from_curl)?;
    // Needed for the progress callback, which is our cancel checkpoint while idle.
    easy.progress(true).map_err(FetchError::from_curl)?;

    // Status of the response currently being received (updated per redirect hop).
    let status = Cell::new(0u32);
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if cancel.is_cancelled() {
                    return false;
                }
                let line = String::from_utf8_lossy(data).trim_end().to_string();
                if let Some((code, _)) = head::parse_status_line(&line) {
                    status.set(code);
                }
                header_lines.push(line);
                true
            })
            .map_err(FetchError::from_curl)?;
        transfer
            .write_function(|data| {
                // Headers are complete by now: refuse the body of a failed response.
                if cancel.is_cancelled() || !head::is_success(status.get()) {
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::from_curl)?;
        transfer
            .progress_function(|_, _, _, _| !cancel.is_cancelled())
            .map_err(FetchError::from_curl)?;
        transfer.perform()
    };

    let head = parse_head(&header_lines);
    match performed {
        Err(_) if cancel.is_cancelled() => return Err(FetchError::Cancelled),
        Err(e) if e.is_write_error() && head.status != 0 && !head.is_success() => {
            return Err(FetchError::Status {
                code: head.status,
                reason: head.reason,
            });
        }
        Err(e) => return Err(FetchError::from_curl(e)),
        Ok(()) => {}
    }

    let code = easy.response_code().map_err(FetchError::from_curl)?;
    if !head::is_success(code) {
        return Err(FetchError::Status {
            code,
            reason: head.reason,
        });
    }

    let text = decode_body(&body, head.content_type.as_deref())?;
    tracing::debug!(
        url = %url,
        status = code,
        bytes = body.len(),
        "response body received"
    );
    Ok(Page::new(text))
}

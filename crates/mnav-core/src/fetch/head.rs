//! Parse response header lines collected during a transfer.

/// Status and the headers we act on, for the final response of a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResponseHead {
    pub status: u32,
    pub reason: String,
    pub content_type: Option<String>,
}

impl ResponseHead {
    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }
}

pub(crate) fn is_success(status: u32) -> bool {
    (200..300).contains(&status)
}

/// Parses `HTTP/1.1 404 Not Found` (or `HTTP/2 200`) into code and reason.
pub(crate) fn parse_status_line(line: &str) -> Option<(u32, String)> {
    let line = line.trim();
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u32>().ok()?;
    let reason = parts.next().unwrap_or("").trim().to_string();
    Some((code, reason))
}

/// Builds the head of the last response in `lines`.
///
/// With redirects libcurl reports every hop's headers; a new status line
/// starts a new response, so earlier values are discarded.
pub(crate) fn parse_head(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((status, reason)) = parse_status_line(line) {
            head = ResponseHead {
                status,
                reason,
                content_type: None,
            };
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                head.content_type = Some(value.trim().to_string());
            }
        }
    }

    head
}

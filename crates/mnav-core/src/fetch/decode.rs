//! Response body decoding: declared charset, then BOM, then UTF-8.

use encoding_rs::{Encoding, UTF_8};

use super::FetchError;

/// Decodes `body` as text.
///
/// A `charset` parameter in `content_type` selects the encoding; a byte-order
/// mark overrides it; with neither, UTF-8 is assumed. Undecodable sequences
/// become U+FFFD. A declared charset that is not a known label is an error
/// rather than a silent fallback.
pub(crate) fn decode_body(body: &[u8], content_type: Option<&str>) -> Result<String, FetchError> {
    let encoding = match content_type.and_then(charset_from_content_type) {
        Some(label) => {
            Encoding::for_label(label.as_bytes()).ok_or(FetchError::Charset(label))?
        }
        None => UTF_8,
    };
    let (text, _, _) = encoding.decode(body);
    Ok(text.into_owned())
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    for part in content_type.split(';').skip(1) {
        let Some((name, value)) = part.split_once('=') else {
            continue;
        };
        if !name.trim().eq_ignore_ascii_case("charset") {
            continue;
        }

        let label = value.trim().trim_matches('"').trim_matches('\'');
        if !label.is_empty() {
            return Some(label.to_owned());
        }
    }

    None
}

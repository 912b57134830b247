//! Character encoding detection and transcoding.
//!
//! Drive exports are normally UTF-8, but the body arrives as bytes and the
//! declared charset can live in the HTTP header, a byte-order mark, or a
//! `<meta>` tag. This module picks one and decodes to a UTF-8 string.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Match the `charset=` parameter of a Content-Type value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a `<meta>` declaration.
const META_SNIFF_LEN: usize = 1024;

/// Detect the encoding of an HTML body.
///
/// Order of precedence:
/// 1. byte-order mark
/// 2. `charset=` in the Content-Type header value
/// 3. `<meta charset>` or `http-equiv` declaration in the first 1024 bytes
/// 4. UTF-8
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    if let Some(encoding) = content_type
        .and_then(|value| capture(&HEADER_CHARSET_RE, value))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(META_SNIFF_LEN)]);
    capture(&CHARSET_META_RE, &head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing, and a
/// leading byte-order mark is dropped.
///
/// # Examples
///
/// ```rust
/// use drive_article_validator::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, used, had_errors) = encoding.decode(html);

    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced invalid byte sequences while decoding");
    }

    decoded.into_owned()
}

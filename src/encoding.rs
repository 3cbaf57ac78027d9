//! Character encoding detection and transcoding.
//!
//! Page snapshots arrive as bytes in whatever charset the site declared.
//! This module sniffs the declaration from early meta tags and decodes to
//! UTF-8 before parsing; undecodable sequences become U+FFFD rather than
//! errors.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// How many leading bytes are searched for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Detect the character encoding declared by an HTML byte stream.
///
/// `<meta charset>` wins over `http-equiv`; an unknown or missing label
/// falls back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&META_CHARSET, &HTTP_EQUIV_CHARSET] {
        let label = pattern
            .captures(&head_str)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        if let Some(label) = label {
            if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Decode HTML bytes to a UTF-8 string using the declared encoding.
///
/// # Examples
///
/// ```
/// use linkharvest::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

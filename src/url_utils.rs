//! URL utilities for href resolution and domain comparison.

use url::Url;

use crate::error::{Error, Result};

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether the URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Extract the hostname from an absolute URL, empty string if invalid.
#[must_use]
pub fn get_domain_url(url_str: &str) -> String {
    let (is_abs, parsed) = is_absolute_url(url_str);

    if !is_abs {
        return String::new();
    }

    parsed
        .and_then(|url| url.host_str().map(std::string::ToString::to_string))
        .unwrap_or_default()
}

/// Resolve an href the way `new URL(href, base)` does: parse it with the
/// base as fallback context, yielding the normalized absolute form.
///
/// A join failure against a known base is an error - the walk must abort
/// rather than emit a record with a bogus `url`. With no base at all,
/// hrefs that parse on their own (absolute http(s), `mailto:`,
/// `javascript:`, `data:`) resolve to themselves and anything relative
/// passes through raw.
pub fn resolve_href(href: &str, base: Option<&Url>) -> Result<String> {
    match base {
        Some(base) => base
            .join(href)
            .map(|resolved| resolved.to_string())
            .map_err(|err| Error::UrlResolveError {
                href: href.to_string(),
                reason: err.to_string(),
            }),
        None => Ok(Url::parse(href)
            .map(|parsed| parsed.to_string())
            .unwrap_or_else(|_| href.to_string())),
    }
}

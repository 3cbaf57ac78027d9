//! # linkharvest
//!
//! Visibility-aware link extraction from HTML documents.
//!
//! The crate parses a page, prunes subtrees a browser would never render
//! (inline `display: none`, `visibility: hidden`, zero opacity) along with
//! comment nodes, then walks the remaining anchors in document order and
//! emits one record per link: position, CSS path, text, word tokens,
//! resolved URL and a set of style features (font size, weight, color and
//! the parent box properties) that downstream ranking feeds on.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkharvest::extract_links;
//!
//! let html = r#"<html><head><base href="https://example.com/"></head><body>
//!     <a href="/story" style="font-size: 16px">Top story tonight</a>
//!     <a href="/hidden" style="display: none; font-size: 16px">Hidden</a>
//! </body></html>"#;
//!
//! let records = extract_links(html)?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].url, "https://example.com/story");
//! assert_eq!(records[0].words, vec!["Top", "story", "tonight"]);
//! # Ok::<(), linkharvest::Error>(())
//! ```
//!
//! ## Features
//!
//! - `readability` (default): article extraction over the pruned document
//!   via `dom_smoothie`, exposed in the [`article`] module.

mod error;
mod options;
mod patterns;
mod pipeline;
mod result;

#[cfg(feature = "readability")]
pub mod article;
pub mod css_path;
pub mod dom;
pub mod encoding;
pub mod features;
pub mod meta;
pub mod pruner;
pub mod ranking;
pub mod style;
pub mod text;
pub mod url_utils;
pub mod visibility;

pub use error::{Error, Result};
pub use options::Options;
pub use result::{ColorValue, ExtractionReport, LinkRecord};
pub use style::{ComputedStyle, InlineStyleProvider, StyleProvider};

use dom_query::Document;

/// Extract link records from an HTML string with default [`Options`].
///
/// Styles are read from inline `style` attributes. Pass a custom
/// [`StyleProvider`] through [`extract_links_from_document`] when computed
/// styles come from somewhere richer.
///
/// # Errors
///
/// Returns an error when the document has no body, when a style provider
/// fails mid-walk, or when an href cannot be resolved against a known base.
///
/// ```rust
/// let records = linkharvest::extract_links(
///     r#"<body><a href="https://example.com/a" style="font-size: 12px">Read this</a></body>"#,
/// )?;
/// assert_eq!(records[0].font_size, 12);
/// # Ok::<(), linkharvest::Error>(())
/// ```
pub fn extract_links(html: &str) -> Result<Vec<LinkRecord>> {
    extract_links_with_options(html, &Options::default())
}

/// Extract link records from an HTML string with the given [`Options`].
///
/// # Errors
///
/// Returns an error when the document has no body, when a style provider
/// fails mid-walk, or when an href cannot be resolved against a known base.
///
/// ```rust
/// use linkharvest::Options;
///
/// let options = Options {
///     base_url: Some("https://news.example.com/section/".to_string()),
///     ..Options::default()
/// };
/// let records = linkharvest::extract_links_with_options(
///     r#"<body><a href="item?id=7" style="font-size: 14px">Item seven</a></body>"#,
///     &options,
/// )?;
/// assert_eq!(records[0].url, "https://news.example.com/section/item?id=7");
/// # Ok::<(), linkharvest::Error>(())
/// ```
pub fn extract_links_with_options(html: &str, options: &Options) -> Result<Vec<LinkRecord>> {
    let doc = dom::parse(html);
    extract_links_from_document(&doc, &InlineStyleProvider, options)
}

/// Extract link records from raw bytes with default [`Options`].
///
/// The payload is transcoded to UTF-8 first, honouring any `<meta>` charset
/// declaration near the top of the document.
///
/// # Errors
///
/// Returns an error when extraction on the decoded document fails.
///
/// ```rust
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\
///     <a href=\"https://example.com/cafe\" style=\"font-size: 11px\">Caf\xE9 guide</a></body></html>";
/// let records = linkharvest::extract_links_bytes(html)?;
/// assert_eq!(records[0].text, "Caf\u{e9} guide");
/// # Ok::<(), linkharvest::Error>(())
/// ```
pub fn extract_links_bytes(html: &[u8]) -> Result<Vec<LinkRecord>> {
    extract_links_bytes_with_options(html, &Options::default())
}

/// Extract link records from raw bytes with the given [`Options`].
///
/// # Errors
///
/// Returns an error when extraction on the decoded document fails.
pub fn extract_links_bytes_with_options(html: &[u8], options: &Options) -> Result<Vec<LinkRecord>> {
    let text = encoding::transcode_to_utf8(html);
    extract_links_with_options(&text, options)
}

/// Extract link records from an already-parsed document.
///
/// This is the full-control entry point: the caller owns the document,
/// chooses the [`StyleProvider`] and decides through
/// [`Options::prune_in_place`] whether pruning may mutate `doc` or must
/// run on an internal working copy.
///
/// # Errors
///
/// Returns an error when the document has no body, when the style provider
/// fails mid-walk, or when an href cannot be resolved against a known base.
pub fn extract_links_from_document(
    doc: &Document,
    provider: &dyn StyleProvider,
    options: &Options,
) -> Result<Vec<LinkRecord>> {
    pipeline::extract_from_document(doc, provider, options)
}

/// Extract link records and fold the outcome into a serialisable report.
///
/// Success serialises as a plain JSON array of records, failure as
/// `{"err": [...]}`. Useful at process boundaries where the consumer
/// expects one JSON document either way.
///
/// ```rust
/// use linkharvest::{extract_links_report, ExtractionReport, Options};
///
/// let report = extract_links_report(
///     r#"<body><a href="https://example.com/" style="font-size: 10px">Home</a></body>"#,
///     &Options::default(),
/// );
/// assert!(matches!(report, ExtractionReport::Links(_)));
/// ```
#[must_use]
pub fn extract_links_report(html: &str, options: &Options) -> ExtractionReport {
    extract_links_with_options(html, options).into()
}

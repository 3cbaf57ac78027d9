//! DOM operations adapter over `dom_query`.
//!
//! The pipeline needs only a handful of node-level helpers; they live here
//! so the rest of the crate stays free of selection plumbing.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril: text helpers hand it out without copying
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// The parser is html5ever underneath: it absorbs malformed markup and
/// always synthesizes the `html`/`head`/`body` scaffolding.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep-copy a document by reserializing and reparsing it.
///
/// Node handles from the source do not carry over; anything keyed on node
/// identity must be re-derived on the copy.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// Get an attribute value from the first node of a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|value| value.to_string())
}

/// Text content of a node and its descendants.
///
/// Returns `StrTendril`; call `.to_string()` only when owned storage is
/// needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// The document's `<base href>` value, if any. The first `base` element
/// wins, matching browser behavior.
#[must_use]
pub fn base_href(doc: &Document) -> Option<String> {
    get_attribute(&doc.select("base"), "href")
}

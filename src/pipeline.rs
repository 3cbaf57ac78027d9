//! The link extraction pipeline.
//!
//! One pass over an already-rendered snapshot: optionally prune, then walk
//! the anchors under `body` in document order and emit one record per
//! surviving link. A traversal-level failure aborts the whole call with no
//! partial records; field-level parse failures degrade per-field instead.

use dom_query::{Document, NodeRef, Selection};
use log::debug;
use url::Url;

use crate::css_path::css_path;
use crate::dom;
use crate::error::{Error, Result};
use crate::features;
use crate::options::Options;
use crate::pruner;
use crate::result::LinkRecord;
use crate::style::{ComputedStyle, StyleProvider};
use crate::text;
use crate::url_utils;

/// Extract link records from a parsed document.
///
/// With default options the walk runs over an internal working copy and
/// the caller's document is left untouched; `prune_in_place` trades that
/// isolation for speed. When pruning is off there is nothing to mutate
/// and the document is walked directly.
pub fn extract_from_document(
    doc: &Document,
    provider: &dyn StyleProvider,
    options: &Options,
) -> Result<Vec<LinkRecord>> {
    if options.prune_first && !options.prune_in_place {
        let working = dom::clone_document(doc);
        return run(&working, provider, options);
    }
    run(doc, provider, options)
}

fn run(doc: &Document, provider: &dyn StyleProvider, options: &Options) -> Result<Vec<LinkRecord>> {
    let body = doc.select("body");
    if !body.exists() {
        return Err(Error::MissingBody);
    }

    if options.prune_first {
        pruner::prune(&body, provider)?;
    }

    let base = document_base(doc, options)?;

    let anchors = body.select("a");
    let mut records: Vec<LinkRecord> = Vec::new();

    for node in anchors.nodes() {
        let sel = Selection::from(*node);

        let Some(text) = text::link_text(&dom::text_content(&sel)) else {
            continue;
        };
        let Some(href) = dom::get_attribute(&sel, "href") else {
            continue;
        };
        if options.excluded_hrefs.contains(&href) {
            continue;
        }

        let url = url_utils::resolve_href(&href, base.as_ref())?;

        let own_style = provider.computed_style(node)?;
        let parent_style = match parent_element(node) {
            Some(parent) => provider.computed_style(&parent)?,
            None => ComputedStyle::new(),
        };
        let fields = features::style_fields(&own_style, &parent_style);

        if fields.font_size <= options.min_font_size_px {
            continue;
        }

        let words = text::split_words(&text);
        records.push(LinkRecord {
            position: records.len(),
            css_sel: css_path(node),
            text,
            words,
            href,
            url,
            font_size: fields.font_size,
            font_weight: fields.font_weight,
            color: fields.color,
            font: fields.font,
            parent_padding: fields.parent_padding,
            parent_margin: fields.parent_margin,
            parent_background_color: fields.parent_background_color,
        });
    }

    debug!(
        "extracted {} records from {} anchors",
        records.len(),
        anchors.length()
    );
    Ok(records)
}

/// Base location for href resolution: the configured `base_url` wins and
/// must parse; otherwise a parseable `<base href>` is used; otherwise
/// resolution runs baseless.
fn document_base(doc: &Document, options: &Options) -> Result<Option<Url>> {
    if let Some(configured) = options.base_url.as_deref() {
        let url = Url::parse(configured.trim()).map_err(|err| {
            Error::TraversalError(format!("invalid base_url {configured:?}: {err}"))
        })?;
        return Ok(Some(url));
    }

    Ok(dom::base_href(doc).and_then(|href| Url::parse(href.trim()).ok()))
}

/// Nearest element ancestor, skipping any non-element parents.
fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.is_element() {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}

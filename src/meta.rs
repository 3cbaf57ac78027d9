//! Social metadata extraction (Open Graph and Twitter card tags).

use std::collections::BTreeMap;

use dom_query::{Document, Selection};
use serde::{Deserialize, Serialize};

use crate::dom;

/// Open Graph and Twitter card properties of one page, keyed without
/// their protocol prefixes.
///
/// Empty sections are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMeta {
    /// `og:*` properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub og: BTreeMap<String, String>,
    /// `twitter:*` properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub twitter: BTreeMap<String, String>,
}

impl SocialMeta {
    /// True when neither protocol contributed any properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.og.is_empty() && self.twitter.is_empty()
    }
}

/// Collect social meta tags from a document.
///
/// Open Graph reads the `property` attribute, Twitter cards read `name`;
/// both require a `content` attribute and a non-empty key after the
/// prefix. Later duplicates overwrite earlier ones.
#[must_use]
pub fn social_meta_tags(doc: &Document) -> SocialMeta {
    let mut meta = SocialMeta::default();

    for node in doc.select("meta").nodes() {
        let tag = Selection::from(*node);
        let Some(content) = dom::get_attribute(&tag, "content") else {
            continue;
        };

        if let Some(property) = dom::get_attribute(&tag, "property") {
            if let Some(key) = property.strip_prefix("og:") {
                if !key.is_empty() {
                    meta.og.insert(key.to_string(), content.clone());
                }
            }
        }

        if let Some(name) = dom::get_attribute(&tag, "name") {
            if let Some(key) = name.strip_prefix("twitter:") {
                if !key.is_empty() {
                    meta.twitter.insert(key.to_string(), content);
                }
            }
        }
    }

    meta
}

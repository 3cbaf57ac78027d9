//! Computed-style access.
//!
//! The pipeline never talks to a renderer. Style information arrives
//! through the [`StyleProvider`] seam: the default implementation reads
//! inline `style` attributes (the snapshot convention of the upstream
//! harness, which writes computed styles into the markup before hand-off),
//! and tests substitute their own providers.

use std::collections::HashMap;

use dom_query::{NodeRef, Selection};

use crate::error::Result;

/// A computed-style mapping for one element: property name to value.
///
/// Property names are stored lower-cased; values are stored trimmed.
/// Missing properties read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    properties: HashMap<String, String>,
}

impl ComputedStyle {
    /// Empty style; every property reads as absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from property/value pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut style = Self::new();
        for (property, value) in pairs {
            style.set(property, value);
        }
        style
    }

    /// Parse inline declaration text (`"color: red; font-size: 17px"`).
    ///
    /// Fragments without a colon are skipped. Later declarations of the
    /// same property win, matching how inline styles cascade.
    #[must_use]
    pub fn from_inline(declarations: &str) -> Self {
        let mut style = Self::new();
        for declaration in declarations.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            style.set(property, value);
        }
        style
    }

    /// Look up one property value.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(&property.to_lowercase()).map(String::as_str)
    }

    /// Look up one property value, empty string when absent.
    #[must_use]
    pub fn get_or_empty(&self, property: &str) -> &str {
        self.get(property).unwrap_or("")
    }

    /// Insert or replace one property value.
    pub fn set(&mut self, property: &str, value: &str) {
        self.properties
            .insert(property.trim().to_lowercase(), value.trim().to_string());
    }

    /// Number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when no properties are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Source of computed styles for element nodes.
///
/// Implementations must derive the style from the element itself
/// (attributes, content), never from node identity captured earlier: the
/// pipeline may hand the provider a reparsed working copy of the document.
///
/// A provider failure aborts the whole walk; no partial records survive.
pub trait StyleProvider {
    /// Computed style for one element node.
    fn computed_style(&self, node: &NodeRef<'_>) -> Result<ComputedStyle>;
}

/// Reads computed styles from inline `style` attributes.
///
/// This matches the snapshot convention where the rendering side inlines
/// each element's computed properties before serializing the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleProvider;

impl StyleProvider for InlineStyleProvider {
    fn computed_style(&self, node: &NodeRef<'_>) -> Result<ComputedStyle> {
        let style = Selection::from(*node)
            .attr("style")
            .map(|declarations| ComputedStyle::from_inline(&declarations))
            .unwrap_or_default();
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    #[test]
    fn test_from_inline_parses_declarations() {
        let style = ComputedStyle::from_inline("color: red; font-size: 17px;");

        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("font-size"), Some("17px"));
        assert_eq!(style.get("display"), None);
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_from_inline_skips_malformed_fragments() {
        let style = ComputedStyle::from_inline("nonsense; color: blue;;");

        assert_eq!(style.len(), 1);
        assert_eq!(style.get("color"), Some("blue"));
    }

    #[test]
    fn test_property_names_are_case_insensitive() {
        let style = ComputedStyle::from_inline("Font-Size: 12px");

        assert_eq!(style.get("font-size"), Some("12px"));
        assert_eq!(style.get("FONT-SIZE"), Some("12px"));
    }

    #[test]
    fn test_later_declaration_wins() {
        let style = ComputedStyle::from_inline("color: red; color: green");

        assert_eq!(style.get("color"), Some("green"));
    }

    #[test]
    fn test_get_or_empty_defaults() {
        let style = ComputedStyle::new();

        assert_eq!(style.get_or_empty("padding"), "");
        assert!(style.is_empty());
    }

    #[test]
    fn test_inline_provider_reads_style_attribute() {
        let doc = Document::from(r#"<html><body><a href="/x" style="display: none">x</a></body></html>"#);
        let sel = doc.select("a");
        let node = sel.nodes().first().expect("anchor node");

        let style = InlineStyleProvider
            .computed_style(node)
            .expect("inline provider is infallible");
        assert_eq!(style.get("display"), Some("none"));
    }

    #[test]
    fn test_inline_provider_missing_attribute_is_empty() {
        let doc = Document::from("<html><body><p>plain</p></body></html>");
        let sel = doc.select("p");
        let node = sel.nodes().first().expect("p node");

        let style = InlineStyleProvider
            .computed_style(node)
            .expect("inline provider is infallible");
        assert!(style.is_empty());
    }
}

//! Ancestor-chain selector strings.

use dom_query::NodeRef;

/// Build the ancestor tag chain for an element: outermost element first,
/// each tag lower-cased, joined by `" > "` (`html > body > div > a`).
///
/// Tag names only: no ids, classes, or sibling indexes. Same-tag siblings
/// therefore share a path; downstream grouping treats that as one style
/// bucket rather than a defect.
#[must_use]
pub fn css_path(node: &NodeRef<'_>) -> String {
    let mut segments: Vec<String> = Vec::new();

    let mut current = Some(*node);
    while let Some(n) = current {
        if n.is_element() {
            if let Some(name) = n.node_name() {
                segments.push(name.to_lowercase());
            }
        }
        current = n.parent();
    }

    segments.reverse();
    segments.join(" > ")
}

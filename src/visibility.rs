//! Hidden-element classification.

use crate::style::ComputedStyle;

/// Two-state visibility classification of a styled element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The element takes part in rendering.
    Visible,
    /// The element is invisible and prunable.
    Hidden,
}

/// Classify one element's computed style.
#[must_use]
pub fn classify(style: &ComputedStyle) -> Visibility {
    if is_hidden(style) {
        Visibility::Hidden
    } else {
        Visibility::Visible
    }
}

/// True when the computed style hides the element.
///
/// Exact string comparison against the renderer's computed spellings:
/// `display: none`, `visibility: hidden`, `opacity: 0` or `0.0`. Other
/// zero spellings (`0.00`, `0%`, `0e0`) do not match and stay visible.
/// Absent properties never hide.
#[must_use]
pub fn is_hidden(style: &ComputedStyle) -> bool {
    style.get("display") == Some("none")
        || style.get("visibility") == Some("hidden")
        || matches!(style.get("opacity"), Some("0" | "0.0"))
}

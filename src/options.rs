//! Configuration options for link extraction.
//!
//! The `Options` struct controls pipeline behavior. All fields are public
//! for easy configuration; use `Default::default()` for standard settings.

use std::collections::HashSet;

/// Configuration options for link extraction.
///
/// # Example
///
/// ```rust
/// use linkharvest::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     prune_first: false,
///     min_font_size_px: 10,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Prune hidden elements and comment nodes before walking anchors.
    ///
    /// Default: `true`
    pub prune_first: bool,

    /// Prune the caller's document directly instead of an internal clone.
    ///
    /// When `false`, the pipeline reserializes and reparses the document
    /// into a working copy, leaving the input untouched. When `true`, the
    /// input document is mutated in place (faster, destructive).
    ///
    /// Default: `false`
    pub prune_in_place: bool,

    /// Raw `href` attribute values that never produce records.
    ///
    /// Membership is an exact string comparison on the attribute value,
    /// before any resolution.
    ///
    /// Default: `{"", "#", "/", "javascript:void(0)"}`
    pub excluded_hrefs: HashSet<String>,

    /// Minimum font size in pixels for a link to be recorded.
    ///
    /// A candidate whose extracted `font_size` is less than or equal to
    /// this value is dropped. The parse-failure sentinel is 0, so with the
    /// default threshold a link whose font size could not be parsed is
    /// dropped as well.
    ///
    /// Default: `0`
    pub min_font_size_px: i64,

    /// Base location for resolving relative hrefs.
    ///
    /// When `None`, the document's `<base href>` is used if present.
    /// With no base at all, absolute and opaque-scheme hrefs resolve to
    /// themselves and relative hrefs pass through raw.
    ///
    /// Default: `None`
    pub base_url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prune_first: true,
            prune_in_place: false,
            excluded_hrefs: ["", "#", "/", "javascript:void(0)"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            min_font_size_px: 0,
            base_url: None,
        }
    }
}

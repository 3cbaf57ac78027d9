//! Compiled regex patterns for style-value normalization.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a whole `rgb(...)`-shaped computed color value.
///
/// `rgba(...)` intentionally does not match: its fourth component would
/// never split into a 3-tuple, so it passes through as a raw string.
pub static RGB_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^rgb\s*\(.*\)$").expect("RGB_SHAPE regex"));

/// Strips every character that is not a decimal digit or a comma.
/// Applied to `rgb(...)` values before splitting into components.
pub static NON_DIGIT_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9,]").expect("NON_DIGIT_COMMA regex"));

/// Captures the leading integer of a numeric style value, after optional
/// whitespace and sign. Mirrors `parseInt` truncation: `17.6px` yields 17,
/// a value with no leading digits yields no match.
pub static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("LEADING_INT regex"));

//! Tolerant normalization of raw style values into record fields.
//!
//! Every function here absorbs malformed input: integers degrade to a 0
//! sentinel, colors degrade to the raw string. A bad field never aborts
//! the record it belongs to.

use crate::patterns;
use crate::result::ColorValue;
use crate::style::ComputedStyle;

/// The style columns of a link record: the anchor's own font metrics and
/// color, plus the box metrics of its immediate parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleFields {
    /// Whole pixels; 0 when the value did not parse.
    pub font_size: i64,
    /// Integer weight; 0 when the value did not parse.
    pub font_weight: i64,
    /// Decoded `rgb(...)` triple or raw string.
    pub color: ColorValue,
    /// Raw `font` shorthand.
    pub font: String,
    /// Raw parent `padding`.
    pub parent_padding: String,
    /// Raw parent `margin`.
    pub parent_margin: String,
    /// Raw parent `background-color`.
    pub parent_background_color: String,
}

/// Extract all style columns from an anchor's computed style and its
/// immediate parent's.
#[must_use]
pub fn style_fields(own: &ComputedStyle, parent: &ComputedStyle) -> StyleFields {
    StyleFields {
        font_size: leading_int(own.get_or_empty("font-size")),
        font_weight: leading_int(own.get_or_empty("font-weight")),
        color: parse_color(own.get_or_empty("color")),
        font: own.get_or_empty("font").to_string(),
        parent_padding: parent.get_or_empty("padding").to_string(),
        parent_margin: parent.get_or_empty("margin").to_string(),
        parent_background_color: parent.get_or_empty("background-color").to_string(),
    }
}

/// Parse the leading integer of a numeric style value, truncating any
/// fraction: `"17.6px"` yields 17. Sentinel 0 when no leading integer
/// exists.
#[must_use]
pub fn leading_int(value: &str) -> i64 {
    patterns::LEADING_INT
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Decode a computed color value.
///
/// An `rgb(...)`-shaped value is stripped to digits and commas and split;
/// exactly three components in 0..=255 become a triple. Everything else,
/// including `rgba(...)` and out-of-range components, passes through as
/// the raw string.
#[must_use]
pub fn parse_color(value: &str) -> ColorValue {
    let trimmed = value.trim();
    if patterns::RGB_SHAPE.is_match(trimmed) {
        let digits = patterns::NON_DIGIT_COMMA.replace_all(trimmed, "");
        let components: Vec<&str> = digits.split(',').collect();
        if components.len() == 3 {
            let parsed: Vec<u8> = components
                .iter()
                .filter_map(|c| c.parse::<u8>().ok())
                .collect();
            if let [r, g, b] = parsed.as_slice() {
                return ColorValue::Rgb([*r, *g, *b]);
            }
        }
    }
    ColorValue::Raw(value.to_string())
}

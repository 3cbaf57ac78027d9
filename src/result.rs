//! Output types for link extraction.
//!
//! `LinkRecord` is the per-link value the pipeline emits; `ExtractionReport`
//! is the harness-facing shape: either the full record array or an error
//! object, never both.

use serde::{Deserialize, Serialize};

/// A computed `color` value: a decoded `rgb(...)` triple, or the raw
/// string when the value has any other shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Three channel values decoded from an `rgb(...)`-shaped string.
    Rgb([u8; 3]),
    /// Any other color spelling, passed through unchanged.
    Raw(String),
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl std::fmt::Display for ColorValue {
    /// Canonical string form, used when a color takes part in a composite
    /// key: decoded triples render back to `rgb(r, g, b)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb([r, g, b]) => write!(f, "rgb({r}, {g}, {b})"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// One extracted link with its style and layout features.
///
/// Serializes to the wire shape consumed downstream: camelCase keys,
/// `color` as either a 3-integer array or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// Dense emission index: 0..N-1 over the emitted records.
    pub position: usize,
    /// Lower-cased ancestor tag chain, joined by `" > "`.
    pub css_sel: String,
    /// Trimmed anchor text with non-breaking spaces normalized.
    pub text: String,
    /// Whitespace tokens of `text`, empties dropped.
    pub words: Vec<String>,
    /// Raw `href` attribute value.
    pub href: String,
    /// `href` resolved against the document base.
    pub url: String,
    /// Font size in whole pixels; 0 when the value did not parse.
    pub font_size: i64,
    /// Font weight as an integer; 0 when the value did not parse.
    pub font_weight: i64,
    /// Computed color, decoded or raw.
    pub color: ColorValue,
    /// Raw `font` shorthand value.
    pub font: String,
    /// Raw `padding` value of the parent element.
    pub parent_padding: String,
    /// Raw `margin` value of the parent element.
    pub parent_margin: String,
    /// Raw `background-color` value of the parent element.
    pub parent_background_color: String,
}

/// The harness-facing result: the record array on success, or an error
/// object carrying the failure messages with zero records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionReport {
    /// Successful extraction: every surviving link in document order.
    Links(Vec<LinkRecord>),
    /// Aborted extraction: `{"err": ["message", ...]}`.
    Failure {
        /// Messages describing why the walk aborted.
        err: Vec<String>,
    },
}

impl From<crate::Result<Vec<LinkRecord>>> for ExtractionReport {
    fn from(result: crate::Result<Vec<LinkRecord>>) -> Self {
        match result {
            Ok(links) => Self::Links(links),
            Err(err) => Self::Failure {
                err: vec![err.to_string()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LinkRecord {
        LinkRecord {
            position: 0,
            css_sel: "html > body > a".to_string(),
            text: "Example".to_string(),
            words: vec!["Example".to_string()],
            href: "/page".to_string(),
            url: "https://example.com/page".to_string(),
            font_size: 16,
            font_weight: 400,
            color: ColorValue::Rgb([51, 51, 51]),
            font: "400 16px Arial, sans-serif".to_string(),
            parent_padding: "0px".to_string(),
            parent_margin: "8px".to_string(),
            parent_background_color: "rgb(255, 255, 255)".to_string(),
        }
    }

    #[test]
    fn test_record_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_record()).expect("serialize");

        assert_eq!(json["position"], 0);
        assert_eq!(json["cssSel"], "html > body > a");
        assert_eq!(json["fontSize"], 16);
        assert_eq!(json["fontWeight"], 400);
        assert_eq!(json["parentBackgroundColor"], "rgb(255, 255, 255)");
        assert_eq!(json["color"], serde_json::json!([51, 51, 51]));
    }

    #[test]
    fn test_raw_color_serializes_as_string() {
        let mut record = sample_record();
        record.color = ColorValue::Raw("inherit".to_string());

        let json = serde_json::to_value(record).expect("serialize");
        assert_eq!(json["color"], "inherit");
    }

    #[test]
    fn test_color_roundtrip_both_variants() {
        let rgb: ColorValue = serde_json::from_str("[0, 128, 255]").expect("rgb");
        assert_eq!(rgb, ColorValue::Rgb([0, 128, 255]));

        let raw: ColorValue = serde_json::from_str("\"#333\"").expect("raw");
        assert_eq!(raw, ColorValue::Raw("#333".to_string()));
    }

    #[test]
    fn test_failure_report_shape() {
        let report = ExtractionReport::from(Err(crate::Error::MissingBody));

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "err": ["Document has no body element"] })
        );
    }

    #[test]
    fn test_success_report_is_plain_array() {
        let report = ExtractionReport::Links(vec![sample_record()]);
        let json = serde_json::to_value(&report).expect("serialize");
        assert!(json.is_array());
        assert_eq!(json.as_array().map(Vec::len), Some(1));
    }
}

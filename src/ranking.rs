//! Downstream grouping and filtering of link records.
//!
//! Links that belong together visually (same ancestor chain, color, font,
//! surrounding box) share a style fingerprint. Groups whose typical text
//! looks like headlines survive; single stray buttons and nav crumbs do
//! not. This is the ranking stage the extraction records feed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::result::LinkRecord;
use crate::text;
use crate::url_utils;

/// Thresholds a group's medians must exceed to be kept.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Median text length (characters) a group must exceed.
    ///
    /// Default: `40`
    pub text_len_threshold: usize,

    /// Median word count a group must exceed.
    ///
    /// Default: `3`
    pub words_threshold: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            text_len_threshold: 40,
            words_threshold: 3,
        }
    }
}

/// Statistics over the records sharing one style fingerprint.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStat {
    /// Number of records in the group.
    pub count: usize,
    /// Median character length of the records' text.
    pub median_text_len: f64,
    /// Median word count of the records' text.
    pub median_words: f64,
    /// Whether both medians exceed their thresholds.
    pub approved: bool,
}

/// A kept link reduced to the fields the consumer publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedLink {
    /// Resolved absolute URL.
    pub url: String,
    /// Title line of the record's text.
    pub text: String,
}

/// Style fingerprint of one record. Records with identical fingerprints
/// render identically and are treated as one visual group.
#[must_use]
pub fn style_key(record: &LinkRecord) -> String {
    [
        record.css_sel.as_str(),
        &record.color.to_string(),
        record.font.as_str(),
        record.parent_padding.as_str(),
        record.parent_margin.as_str(),
        record.parent_background_color.as_str(),
    ]
    .join("|")
}

/// Compute per-group statistics over all records.
#[must_use]
pub fn group_stats(records: &[LinkRecord], options: &RankOptions) -> HashMap<String, GroupStat> {
    let mut text_lens: HashMap<String, Vec<usize>> = HashMap::new();
    let mut word_counts: HashMap<String, Vec<usize>> = HashMap::new();

    for record in records {
        let key = style_key(record);
        text_lens
            .entry(key.clone())
            .or_default()
            .push(record.text.chars().count());
        word_counts.entry(key).or_default().push(record.words.len());
    }

    let mut stats = HashMap::new();
    for (key, mut lens) in text_lens {
        let mut words = word_counts.remove(&key).unwrap_or_default();
        let count = lens.len();
        let median_text_len = median(&mut lens);
        let median_words = median(&mut words);
        let approved = median_text_len > options.text_len_threshold as f64
            && median_words > options.words_threshold as f64;
        stats.insert(
            key,
            GroupStat {
                count,
                median_text_len,
                median_words,
                approved,
            },
        );
    }
    stats
}

/// Keep the records of approved groups, ordered by position.
#[must_use]
pub fn rank_records(records: &[LinkRecord], options: &RankOptions) -> Vec<LinkRecord> {
    let stats = group_stats(records, options);

    let mut kept: Vec<LinkRecord> = records
        .iter()
        .filter(|record| {
            stats
                .get(&style_key(record))
                .is_some_and(|stat| stat.approved)
        })
        .cloned()
        .collect();
    kept.sort_by_key(|record| record.position);
    kept
}

/// Drop records whose resolved URL points off-site.
///
/// Host comparison ignores a `www.` prefix and accepts subdomains of the
/// page host (and vice versa). Records without an absolute http(s) URL
/// never match.
#[must_use]
pub fn filter_same_domain(records: &[LinkRecord], page_url: &str) -> Vec<LinkRecord> {
    records
        .iter()
        .filter(|record| same_domain(&record.url, page_url))
        .cloned()
        .collect()
}

/// True when two absolute URLs belong to the same site.
#[must_use]
pub fn same_domain(url_a: &str, url_b: &str) -> bool {
    let host_a = url_utils::get_domain_url(url_a);
    let host_b = url_utils::get_domain_url(url_b);
    if host_a.is_empty() || host_b.is_empty() {
        return false;
    }

    let a = host_a.trim_start_matches("www.");
    let b = host_b.trim_start_matches("www.");
    a == b || a.ends_with(&format!(".{b}")) || b.ends_with(&format!(".{a}"))
}

/// Reduce ranked records to the published `{url, text}` pairs, picking
/// the title line out of each record's text.
#[must_use]
pub fn condense(records: &[LinkRecord]) -> Vec<RankedLink> {
    records
        .iter()
        .map(|record| RankedLink {
            url: record.url.clone(),
            text: text::longest_line(&record.text),
        })
        .collect()
}

/// Median with the middle pair averaged for even-sized input.
fn median(values: &mut [usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid] as f64
    } else {
        (values[mid - 1] + values[mid]) as f64 / 2.0
    }
}

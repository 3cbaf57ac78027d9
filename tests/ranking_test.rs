//! Grouping, ranking and domain-filtering tests over extracted records.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use linkharvest::ranking::{
    condense, filter_same_domain, group_stats, rank_records, same_domain, style_key, RankOptions,
};
use linkharvest::extract_links;

/// A front page with a headline list and short nav crumbs. Headlines share
/// one style fingerprint, nav links another.
const FRONT_PAGE: &str = r#"<html><head><base href="https://example.com/"></head><body>
    <nav>
        <a href="/home" style="font-size: 12px; color: rgb(80, 80, 80)">Home</a>
        <a href="/about" style="font-size: 12px; color: rgb(80, 80, 80)">About</a>
        <a href="/contact" style="font-size: 12px; color: rgb(80, 80, 80)">Contact</a>
    </nav>
    <main>
        <p><a href="/story/1" style="font-size: 18px; color: rgb(0, 0, 0)">City council approves the riverside development plan</a></p>
        <p><a href="/story/2" style="font-size: 18px; color: rgb(0, 0, 0)">Regional rail upgrade slips another two quarters</a></p>
        <p><a href="/story/3" style="font-size: 18px; color: rgb(0, 0, 0)">Hospital expansion clears its final planning hurdle</a></p>
    </main>
</body></html>"#;

#[test]
fn headline_group_is_approved_and_nav_group_is_not() {
    let records = extract_links(FRONT_PAGE).expect("extraction");
    assert_eq!(records.len(), 6);

    let stats = group_stats(&records, &RankOptions::default());

    assert_eq!(stats.len(), 2);
    let headline_key = style_key(&records[3]);
    let nav_key = style_key(&records[0]);
    assert_ne!(headline_key, nav_key);
    assert!(stats[&headline_key].approved);
    assert_eq!(stats[&headline_key].count, 3);
    assert!(!stats[&nav_key].approved);
}

#[test]
fn rank_records_keeps_approved_groups_in_position_order() {
    let records = extract_links(FRONT_PAGE).expect("extraction");

    let ranked = rank_records(&records, &RankOptions::default());

    let urls: Vec<&str> = ranked.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://example.com/story/1",
            "https://example.com/story/2",
            "https://example.com/story/3",
        ]
    );
}

#[test]
fn thresholds_are_strict_inequalities() {
    let records = extract_links(FRONT_PAGE).expect("extraction");
    let options = RankOptions {
        // Median headline here is exactly 51 chars / 7 words.
        text_len_threshold: 51,
        words_threshold: 3,
    };

    let ranked = rank_records(&records, &options);

    assert!(ranked.is_empty());
}

#[test]
fn filter_same_domain_drops_offsite_records() {
    let html = r#"<body>
        <a href="https://example.com/local" style="font-size: 14px">Local story</a>
        <a href="https://www.example.com/www-local" style="font-size: 14px">Subdomain story</a>
        <a href="https://partner.example.org/offsite" style="font-size: 14px">Offsite story</a>
    </body>"#;
    let records = extract_links(html).expect("extraction");

    let kept = filter_same_domain(&records, "https://example.com/news");

    let urls: Vec<&str> = kept.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://example.com/local",
            "https://www.example.com/www-local",
        ]
    );
}

#[test]
fn same_domain_matches_across_subdomains_but_not_lookalikes() {
    assert!(same_domain(
        "https://news.example.com/a",
        "https://example.com/b"
    ));
    assert!(same_domain(
        "https://www.example.com/a",
        "https://example.com/b"
    ));
    assert!(!same_domain(
        "https://notexample.com/a",
        "https://example.com/b"
    ));
    assert!(!same_domain(
        "https://example.org/a",
        "https://example.com/b"
    ));
}

#[test]
fn condense_reduces_records_to_url_and_title_line() {
    let html = "<body><a href=\"https://example.com/multi\" style=\"font-size: 14px\">short lede\nA considerably longer second line that carries the actual headline</a></body>";
    let records = extract_links(html).expect("extraction");

    let condensed = condense(&records);

    assert_eq!(condensed.len(), 1);
    assert_eq!(condensed[0].url, "https://example.com/multi");
    assert_eq!(
        condensed[0].text,
        "A considerably longer second line that carries the actual headline"
    );
}

#[test]
fn ranking_accepts_empty_input() {
    let records = extract_links("<body></body>").expect("extraction");
    assert!(records.is_empty());

    assert!(group_stats(&records, &RankOptions::default()).is_empty());
    assert!(rank_records(&records, &RankOptions::default()).is_empty());
    assert!(condense(&records).is_empty());
}

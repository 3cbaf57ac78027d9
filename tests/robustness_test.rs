//! Malformed, hostile and oversized input handling.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use linkharvest::{extract_links, extract_links_bytes};
use std::time::{Duration, Instant};

#[test]
fn extract_links_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = r#"<p>text<div><a href="https://example.com/a" style="font-size: 14px">dangling link"#;
    let records = extract_links(html).expect("malformed markup still parses");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "dangling link");
}

#[test]
fn extract_links_does_not_panic_on_invalid_nesting() {
    let html = r#"<p><div></p></div><a href="https://example.com/x" style="font-size: 14px">x</a>"#;
    let result = extract_links(html);
    assert!(result.is_ok());
}

#[test]
fn extract_links_does_not_panic_on_broken_attributes() {
    let html = r#"<div class="test id=broken><a href="https://example.com/a">text</a>"#;
    let result = extract_links(html);
    assert!(result.is_ok());
}

#[test]
fn extract_links_returns_empty_for_empty_input() {
    let records = extract_links("").expect("empty input yields an empty result");
    assert!(records.is_empty());
}

#[test]
fn extract_links_returns_empty_for_whitespace_only_input() {
    let records = extract_links("   \n\t  ").expect("whitespace input yields an empty result");
    assert!(records.is_empty());
}

#[test]
fn extract_links_returns_empty_for_linkless_documents() {
    let records = extract_links("<html><body><p>No anchors here.</p></body></html>")
        .expect("linkless document");
    assert!(records.is_empty());
}

#[test]
fn extract_links_handles_null_bytes_gracefully() {
    let html = "text\x00more<a href=\"https://example.com/n\" style=\"font-size: 14px\">ok</a>";
    let result = extract_links(html);
    assert!(result.is_ok());
}

#[test]
fn extract_links_bytes_handles_arbitrary_binary_input() {
    let bytes: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let result = extract_links_bytes(&bytes);
    assert!(result.is_ok());
}

#[test]
fn anchors_inside_script_tags_are_not_extracted() {
    let html = r#"<body>
        <script>var tpl = '<a href="https://example.com/tpl" style="font-size: 14px">template</a>';</script>
        <a href="https://example.com/real" style="font-size: 14px">real link</a>
    </body>"#;

    let records = extract_links(html).expect("extraction");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "real link");
}

#[test]
fn extract_links_handles_large_html_without_panic() {
    let target_size = 4 * 1024 * 1024;
    let chunk = r#"<p>filler text between anchors</p><p><a href="https://example.com/i" style="font-size: 14px">Repeated item link</a></p>"#;
    let mut html = String::with_capacity(target_size + 128);
    html.push_str("<html><body>");
    while html.len() < target_size {
        html.push_str(chunk);
    }
    html.push_str("</body></html>");

    let start = Instant::now();
    let records = extract_links(&html).expect("large document");
    let elapsed = start.elapsed();

    assert!(!records.is_empty());
    assert!(
        elapsed < Duration::from_secs(30),
        "large extraction took {elapsed:?}"
    );
}

#[test]
fn deeply_nested_anchors_do_not_overflow_the_stack() {
    let depth = 2000;
    let mut html = String::new();
    html.push_str("<body>");
    for _ in 0..depth {
        html.push_str("<div>");
    }
    html.push_str(r#"<a href="https://example.com/deep" style="font-size: 14px">deep link</a>"#);
    for _ in 0..depth {
        html.push_str("</div>");
    }
    html.push_str("</body>");

    let records = extract_links(&html).expect("deep nesting");

    assert_eq!(records.len(), 1);
    assert!(records[0].css_sel.contains("div > a"));
}

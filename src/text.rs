//! Text normalization helpers for link records.

const NBSP: char = '\u{00A0}';

/// Lines longer than this end the longest-line search in [`longest_line`].
const ACCEPTABLE_LINE_LEN: usize = 40;

/// Replace non-breaking spaces with ASCII spaces.
#[must_use]
pub fn normalize_nbsp(text: &str) -> String {
    text.replace(NBSP, " ")
}

/// Split into whitespace-delimited tokens, dropping empty tokens.
#[must_use]
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(ToString::to_string).collect()
}

/// Trim and normalize raw anchor text into record form.
///
/// Returns `None` when nothing remains after trimming; such anchors
/// produce no record.
#[must_use]
pub fn link_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(normalize_nbsp(trimmed))
}

/// Pick the title line out of multi-line link text.
///
/// The longest line wins; the search stops as soon as the running best
/// exceeds the acceptable length, so an early headline-sized line beats a
/// longer blurb further down.
#[must_use]
pub fn longest_line(text: &str) -> String {
    let mut best = "";
    for line in text.lines() {
        if line.len() > best.len() {
            best = line;
        }
        if best.len() > ACCEPTABLE_LINE_LEN {
            break;
        }
    }
    best.trim().to_string()
}

//! Article extraction over a pruned document.
//!
//! The sibling use of the pruner: strip hidden subtrees and comments from
//! a working copy, then hand the cleaned document to the readability
//! engine as a black box. Available behind the `readability` feature.

use dom_query::Document;
use dom_smoothie::Readability;
use log::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::pruner;
use crate::style::StyleProvider;

/// Readability output for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Article title as identified by the engine.
    pub title: String,
    /// Main content as an HTML fragment.
    pub content_html: String,
    /// Main content as plain text.
    pub text: String,
}

/// Extract the main article from a document.
///
/// Always operates on a working copy: the caller's document is never
/// mutated. Hidden subtrees and comments are pruned first so the engine
/// scores only rendered content.
pub fn extract_article(doc: &Document, provider: &dyn StyleProvider) -> Result<Article> {
    let working = dom::clone_document(doc);

    let body = working.select("body");
    if !body.exists() {
        return Err(Error::MissingBody);
    }
    let stats = pruner::prune(&body, provider)?;
    debug!(
        "readability hand-off after pruning {} hidden / {} comments",
        stats.hidden_removed, stats.comments_removed
    );

    let mut reader = Readability::with_document(working, None, None)
        .map_err(|err| Error::TraversalError(format!("readability setup failed: {err}")))?;
    let article = reader
        .parse()
        .map_err(|err| Error::TraversalError(format!("readability parse failed: {err}")))?;

    Ok(Article {
        title: article.title.to_string(),
        content_html: article.content.to_string(),
        text: article.text_content.trim().to_string(),
    })
}

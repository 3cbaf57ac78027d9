//! Two-phase removal of hidden elements and comment nodes.
//!
//! Classification snapshots the tree before anything is unlinked, so the
//! walk never observes its own removals. Whether the tree handed in is the
//! caller's live document or a disposable copy is the caller's decision;
//! this module mutates exactly what it is given.

use dom_query::{NodeRef, Selection};
use log::debug;

use crate::error::Result;
use crate::style::StyleProvider;
use crate::visibility;

/// Counts of nodes collected and removed by one pruning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Elements whose computed style classified as hidden.
    pub hidden_removed: usize,
    /// Comment nodes, including any inside hidden subtrees.
    pub comments_removed: usize,
}

/// Prune every hidden element and every comment node under `root`.
///
/// Phase one snapshots and classifies all element descendants; phase two
/// collects comment nodes with an explicit-stack walk; only then is
/// anything unlinked. A style-provider failure aborts before the first
/// removal, leaving the tree untouched.
pub fn prune(root: &Selection<'_>, provider: &dyn StyleProvider) -> Result<PruneStats> {
    let hidden = collect_hidden(root, provider)?;
    let comments = collect_comments(root);

    // Children collect after their ancestors; removing in reverse unlinks
    // inner nodes first.
    for node in hidden.iter().rev() {
        node.remove_from_parent();
    }
    for comment in &comments {
        comment.remove_from_parent();
    }

    let stats = PruneStats {
        hidden_removed: hidden.len(),
        comments_removed: comments.len(),
    };
    debug!(
        "pruned {} hidden elements and {} comment nodes",
        stats.hidden_removed, stats.comments_removed
    );
    Ok(stats)
}

/// Snapshot all element descendants of `root` and classify each.
fn collect_hidden<'a>(
    root: &Selection<'a>,
    provider: &dyn StyleProvider,
) -> Result<Vec<NodeRef<'a>>> {
    let mut hidden = Vec::new();
    for node in root.nodes() {
        for descendant in node.descendants() {
            if !descendant.is_element() {
                continue;
            }
            let style = provider.computed_style(&descendant)?;
            if visibility::is_hidden(&style) {
                hidden.push(descendant);
            }
        }
    }
    Ok(hidden)
}

/// Collect every comment node under `root`.
///
/// Iterative walk with an explicit stack: comment density is unbounded and
/// deep trees must not grow the call stack.
fn collect_comments<'a>(root: &Selection<'a>) -> Vec<NodeRef<'a>> {
    let mut comments = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = root.nodes().to_vec();

    while let Some(node) = stack.pop() {
        if node.is_comment() {
            comments.push(node);
        }
        let mut child = node.first_child();
        while let Some(current) = child {
            stack.push(current);
            child = current.next_sibling();
        }
    }

    comments
}

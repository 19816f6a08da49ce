//! Comment threading
//!
//! Turns the flat, chronologically sortable comment rows of one post into a
//! forest of root comments with their replies nested underneath.
//!
//! Replies attach to their immediate parent down to a maximum depth. Below
//! that depth they are listed beside their parent, under the deepest
//! ancestor that may still hold replies, so a rendered thread never nests
//! deeper than [`MAX_THREAD_DEPTH`]. A comment whose parent is absent from
//! the input (deleted, or never existed) is dropped together with
//! everything below it. The builder never fails.

use std::collections::{HashMap, HashSet};

use crate::entities::{Comment, CommentRecord};
use crate::value_objects::CommentId;

/// Deepest reply level a thread holds; roots are level 0
pub const MAX_THREAD_DEPTH: usize = 6;

/// Build the reply tree for one post, nesting at most [`MAX_THREAD_DEPTH`] levels
///
/// Both the roots and every reply list are ordered by `created_at`
/// ascending; rows with equal timestamps keep their input order.
pub fn build_comment_tree<I>(records: I) -> Vec<Comment>
where
    I: IntoIterator<Item = CommentRecord>,
{
    build_comment_tree_with_max_depth(records, MAX_THREAD_DEPTH)
}

/// Build the reply tree with an explicit nesting limit
///
/// A reply whose natural level would exceed `max_depth` is hoisted to
/// level `max_depth`, keeping its own `parent_id`.
pub fn build_comment_tree_with_max_depth<I>(records: I, max_depth: usize) -> Vec<Comment>
where
    I: IntoIterator<Item = CommentRecord>,
{
    let mut records: Vec<CommentRecord> = records.into_iter().collect();
    records.sort_by_key(|r| r.created_at);

    // Pass 1: roots in order, every other node bucketed under its parent id.
    let mut seen: HashSet<CommentId> = HashSet::with_capacity(records.len());
    let mut roots: Vec<Comment> = Vec::new();
    let mut children: HashMap<CommentId, Vec<Comment>> = HashMap::new();

    for record in records {
        if !seen.insert(record.id) {
            continue;
        }
        match record.parent_id {
            None => roots.push(record.into()),
            Some(parent_id) => children.entry(parent_id).or_default().push(record.into()),
        }
    }

    // Pass 2: walk down from the roots, claiming each bucket whose parent is
    // reachable, and pick the node each comment will hang under. Buckets
    // never claimed belong to missing parents.
    let mut preorder: Vec<(Comment, Option<CommentId>)> = Vec::with_capacity(seen.len());
    let mut stack: Vec<(Comment, usize, Option<CommentId>)> =
        roots.into_iter().rev().map(|root| (root, 0, None)).collect();
    while let Some((node, depth, holder)) = stack.pop() {
        if let Some(replies) = children.remove(&node.id) {
            let (reply_depth, reply_holder) = if depth < max_depth {
                (depth + 1, Some(node.id))
            } else {
                (depth, holder)
            };
            stack.extend(
                replies
                    .into_iter()
                    .rev()
                    .map(|reply| (reply, reply_depth, reply_holder)),
            );
        }
        preorder.push((node, holder));
    }

    // Assemble bottom-up without recursion.
    let mut assembled: HashMap<CommentId, Vec<Comment>> = HashMap::new();
    let mut tree: Vec<Comment> = Vec::new();
    for (mut node, holder) in preorder.into_iter().rev() {
        if let Some(mut replies) = assembled.remove(&node.id) {
            replies.reverse();
            // hoisted replies arrive in thread order
            replies.sort_by_key(|c| c.created_at);
            node.replies = replies;
        }
        match holder {
            Some(holder_id) => assembled.entry(holder_id).or_default().push(node),
            None => tree.push(node),
        }
    }
    tree.reverse();
    tree.sort_by_key(|c| c.created_at);
    tree
}

/// Depth of the most deeply nested reply; 0 for a forest of bare roots
pub fn thread_depth(tree: &[Comment]) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&Comment, usize)> = tree.iter().map(|c| (c, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.replies.iter().map(|r| (r, depth + 1)));
    }
    deepest
}

/// Total number of comments reachable in a built tree
pub fn count_threaded(tree: &[Comment]) -> usize {
    tree.iter().map(Comment::thread_len).sum()
}

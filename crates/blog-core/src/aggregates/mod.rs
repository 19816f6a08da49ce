//! In-memory aggregates computed from flat storage rows

mod comment_tree;
mod reaction_counts;

pub use comment_tree::{
    build_comment_tree, build_comment_tree_with_max_depth, count_threaded, thread_depth,
    MAX_THREAD_DEPTH,
};
pub use reaction_counts::{
    compute_reaction_counts, compute_reaction_counts_batch, ReactionCounts, ReactionTransition,
    ToggleAction, ToggleOutcome,
};

//! # blog-core
//!
//! Domain layer containing entities, value objects, the authorization policy,
//! comment threading, reaction aggregation and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod policy;
pub mod text;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregates::{
    build_comment_tree, compute_reaction_counts, compute_reaction_counts_batch, ReactionCounts,
    ReactionTransition, ToggleAction, ToggleOutcome, MAX_THREAD_DEPTH,
};
pub use entities::{
    AuthorSummary, Category, CategorySummary, Comment, CommentAuthor, CommentRecord, Media,
    NewComment, Post, PostPage, PostStatus, PublicPost, Reaction, ReactionKind, User,
};
pub use error::DomainError;
pub use policy::{require_caller, Action, Caller};
pub use traits::{
    CategoryRepository, CommentRepository, MediaRepository, PageRequest, PostRepository,
    ReactionRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    CategoryId, CommentId, IdParseError, MediaId, Permissions, PostId, ReactionId, Role, UserId,
};

//! Repository ports

mod repositories;

pub use repositories::{
    CategoryRepository, CommentRepository, MediaRepository, PageRequest, PostRepository,
    ReactionRepository, RepoResult, UserRepository,
};

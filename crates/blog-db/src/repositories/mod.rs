//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod comment;
mod error;
mod media;
mod post;
mod reaction;
mod user;

pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use media::PgMediaRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;

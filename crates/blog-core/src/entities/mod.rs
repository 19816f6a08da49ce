//! Domain entities - core business objects

mod category;
mod comment;
mod media;
mod post;
mod reaction;
mod user;

pub use category::{Category, CategorySummary};
pub use comment::{Comment, CommentAuthor, CommentRecord, NewComment};
pub use media::{is_allowed_media_type, Media, ALLOWED_MEDIA_TYPES, DEFAULT_MAX_MEDIA_BYTES};
pub use post::{Post, PostPage, PostStatus, PublicPost};
pub use reaction::{Reaction, ReactionKind, ReactionKindParseError};
pub use user::{AuthorSummary, User};

//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod comment;
mod media;
mod post;
mod reaction;
mod user;

pub use category::CategoryModel;
pub use comment::CommentModel;
pub use media::MediaModel;
pub use post::{PostCategoryModel, PostModel, PublicPostModel};
pub use reaction::ReactionModel;
pub use user::UserModel;

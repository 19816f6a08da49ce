//! Value objects - immutable types that represent domain concepts

mod ids;
mod permissions;
mod role;

pub use ids::{CategoryId, CommentId, IdParseError, MediaId, PostId, ReactionId, UserId};
pub use permissions::Permissions;
pub use role::{Role, RoleParseError};
